use std::{collections::HashMap, path::PathBuf};

use crate::args::Args;
use crate::errors::{config_error, ConfigError};

use super::selection_config::SelectionConfig;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub Action inputs (`with:` keys are exposed as INPUT_<NAME>)
pub const INPUT_REQUEST_REVIEWERS: &str = "INPUT_REQUEST_REVIEWERS";
pub const INPUT_DEFAULT_LABEL: &str = "INPUT_DEFAULT_LABEL";
pub const INPUT_CLASS_OF_REVIEWERS: &str = "INPUT_CLASS_OF_REVIEWERS";
pub const INPUT_NUMBER_OF_REVIEWERS: &str = "INPUT_NUMBER_OF_REVIEWERS";
pub const INPUT_SLACK_WEBHOOK: &str = "INPUT_SLACK_WEBHOOK";
pub const INPUT_GITHUB_TOKEN: &str = "INPUT_GITHUB-TOKEN";

// Runner provided
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub pool_path: PathBuf,
    pub event_path: PathBuf,
    /// `owner/name`; when absent the event payload's repository is used
    pub repository: Option<String>,
    pub api_url: String,
    /// Empty only in dry-run mode
    pub github_token: String,
    pub slack_webhook: Option<String>,
    pub selection: SelectionConfig,
    pub dry_run: bool,
}

impl ActionConfig {
    /// Collects the environment variables this tool reads (action inputs, runner and
    /// logging settings).
    pub fn collect_env_vars() -> HashMap<String, String> {
        const PREFIXES: [&str; 4] = ["INPUT_", "GITHUB_", "RUNNER_", "ASSIGN_REVIEWERS_"];
        std::env::vars()
            .filter(|(key, _)| PREFIXES.iter().any(|p| key.starts_with(p)))
            .collect()
    }

    /// Merges command-line flags over the action environment. Flags win; empty values
    /// count as unset on both sides.
    pub fn from_args_and_env(
        args: Args,
        env_map: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| {
            env_map
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let pick = |flag: Option<String>, key: &str| {
            flag.map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .or_else(|| env(key))
        };

        let pool_path = args
            .request_reviewers
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| env(INPUT_REQUEST_REVIEWERS).map(PathBuf::from))
            .ok_or_else(|| config_error("request_reviewers"))?;

        let event_path = args
            .event_path
            .or_else(|| env(GITHUB_EVENT_PATH).map(PathBuf::from))
            .ok_or_else(|| config_error("GITHUB_EVENT_PATH"))?;

        let default_label = pick(args.default_label, INPUT_DEFAULT_LABEL);
        let class_of_reviewers = pick(args.class_of_reviewers, INPUT_CLASS_OF_REVIEWERS);
        let number_of_reviewers = pick(args.number_of_reviewers, INPUT_NUMBER_OF_REVIEWERS);
        let selection = SelectionConfig::from_inputs(
            default_label.as_deref(),
            class_of_reviewers.as_deref(),
            number_of_reviewers.as_deref(),
        )?;

        let github_token = pick(args.github_token, INPUT_GITHUB_TOKEN)
            .or_else(|| env(GITHUB_TOKEN))
            .unwrap_or_default();
        if github_token.is_empty() && !args.dry_run {
            return Err(ConfigError::EmptyToken);
        }

        Ok(Self {
            pool_path,
            event_path,
            repository: pick(args.repository, GITHUB_REPOSITORY),
            api_url: pick(args.api_url, GITHUB_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            github_token,
            slack_webhook: pick(args.slack_webhook, INPUT_SLACK_WEBHOOK),
            selection,
            dry_run: args.dry_run,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.api_url) {
            return Err(ConfigError::InvalidUrl(self.api_url.clone()));
        }
        if let Some(webhook) = &self.slack_webhook {
            if !is_http_url(webhook) {
                return Err(ConfigError::InvalidUrl(webhook.clone()));
            }
        }
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
