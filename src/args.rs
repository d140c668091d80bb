use clap::Parser;
use std::path::PathBuf;

/// assign-reviewers - 在 PR 被打标签时自动分配评审人
///
/// 所有参数都可以省略，此时从 GitHub Action 的 `INPUT_*` 环境变量读取。
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "assign-reviewers", version)]
#[command(about = "Assign pull request reviewers from a configured pool")]
pub struct Args {
    /// 评审人分组 JSON 文件 (request_reviewers)
    #[arg(long, value_name = "PATH")]
    pub request_reviewers: Option<PathBuf>,

    /// 固定使用的分组 (default_label)
    #[arg(long)]
    pub default_label: Option<String>,

    /// 按团队配额抽取，例如 "frontend: 1, backend: 2" (class_of_reviewers)
    #[arg(long)]
    pub class_of_reviewers: Option<String>,

    /// 评审人数量，0 到 15 (number_of_reviewers)
    #[arg(long)]
    pub number_of_reviewers: Option<String>,

    /// Slack Incoming Webhook URL
    #[arg(long)]
    pub slack_webhook: Option<String>,

    /// GitHub token
    #[arg(long)]
    pub github_token: Option<String>,

    /// 事件文件，默认为 GITHUB_EVENT_PATH
    #[arg(long, value_name = "PATH")]
    pub event_path: Option<PathBuf>,

    /// owner/name，默认为 GITHUB_REPOSITORY
    #[arg(long)]
    pub repository: Option<String>,

    /// GitHub API 地址，默认为 GITHUB_API_URL 或 https://api.github.com
    #[arg(long)]
    pub api_url: Option<String>,

    /// 只计算评审人，不调用 GitHub 和 Slack
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "assign-reviewers",
            "--request-reviewers",
            ".github/reviewers.json",
            "--class-of-reviewers",
            "frontend: 1, backend: 1",
            "--number-of-reviewers",
            "2",
            "--dry-run",
        ]);
        assert_eq!(
            args.request_reviewers,
            Some(PathBuf::from(".github/reviewers.json"))
        );
        assert_eq!(
            args.class_of_reviewers.as_deref(),
            Some("frontend: 1, backend: 1")
        );
        assert_eq!(args.number_of_reviewers.as_deref(), Some("2"));
        assert!(args.dry_run);
        assert!(args.default_label.is_none());
    }

    #[test]
    fn test_no_flags() {
        let args = Args::parse_from(["assign-reviewers"]);
        assert!(args.request_reviewers.is_none());
        assert!(!args.dry_run);
    }
}
