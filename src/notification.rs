use crate::types::{PullRequestContext, Reviewer};
use serde_json::{json, Value};

/// Slack Block Kit message announcing the assigned reviewers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewNotification {
    pub title_line: String,
    pub reviewee: String,
    pub reviewers: String,
}

impl ReviewNotification {
    /// `author_chat_id` is the author's Slack id if any pool entry records one.
    pub fn compose(
        pull_request: &PullRequestContext,
        author_chat_id: Option<&str>,
        reviewers: &[Reviewer],
    ) -> Self {
        let title_line = format!(
            "*<{}|{}>*",
            escape_link_url(&pull_request.url),
            escape_mrkdwn(&pull_request.title)
        );
        let reviewee = match author_chat_id {
            Some(id) => mention(id),
            None => pull_request.author.clone(),
        };
        let reviewers = if reviewers.is_empty() {
            "_none_".to_string()
        } else {
            reviewers
                .iter()
                .map(|r| match &r.chat_id {
                    Some(id) => mention(id),
                    None => r.handle.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            title_line,
            reviewee,
            reviewers,
        }
    }

    pub fn to_payload(&self) -> Value {
        json!({
            "blocks": [
                {
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": self.title_line }
                },
                {
                    "type": "section",
                    "fields": [
                        { "type": "mrkdwn", "text": format!("*Reviewee:*\n{}", self.reviewee) },
                        { "type": "mrkdwn", "text": format!("*Reviewers:*\n{}", self.reviewers) }
                    ]
                }
            ]
        })
    }
}

fn mention(chat_id: &str) -> String {
    format!("<@{}>", chat_id)
}

/// Slack treats `&`, `<` and `>` as control characters in mrkdwn text.
fn escape_mrkdwn(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `|` ends the URL part of a `<url|text>` link, so it is percent-encoded.
fn escape_link_url(url: &str) -> String {
    escape_mrkdwn(url).replace('|', "%7C")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_request() -> PullRequestContext {
        PullRequestContext {
            number: 42,
            title: "Use <T> & friends".to_string(),
            url: "https://github.com/acme/widgets/pull/42".to_string(),
            author: "bob".to_string(),
            label: "backend".to_string(),
        }
    }

    #[test]
    fn test_compose_with_chat_ids() {
        let reviewers = vec![
            Reviewer::new("alice").with_chat_id("U01"),
            Reviewer::new("carol"),
        ];
        let message = ReviewNotification::compose(&pull_request(), Some("U02"), &reviewers);

        assert_eq!(
            message.title_line,
            "*<https://github.com/acme/widgets/pull/42|Use &lt;T&gt; &amp; friends>*"
        );
        assert_eq!(message.reviewee, "<@U02>");
        assert_eq!(message.reviewers, "<@U01>, carol");
    }

    #[test]
    fn test_link_url_cannot_break_out_of_link() {
        let mut pr = pull_request();
        pr.url = "https://example.test/pull/42?q=a|b>c&d".to_string();
        pr.title = "Fix".to_string();
        let message = ReviewNotification::compose(&pr, None, &[]);

        assert_eq!(
            message.title_line,
            "*<https://example.test/pull/42?q=a%7Cb&gt;c&amp;d|Fix>*"
        );
    }

    #[test]
    fn test_compose_without_chat_ids() {
        let message = ReviewNotification::compose(&pull_request(), None, &[]);
        assert_eq!(message.reviewee, "bob");
        assert_eq!(message.reviewers, "_none_");
    }

    #[test]
    fn test_payload_layout() {
        let reviewers = vec![Reviewer::new("alice").with_chat_id("U01")];
        let payload = ReviewNotification::compose(&pull_request(), None, &reviewers).to_payload();

        let blocks = payload["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["type"], "section");
        assert_eq!(blocks[1]["fields"][0]["text"], "*Reviewee:*\nbob");
        assert_eq!(blocks[1]["fields"][1]["text"], "*Reviewers:*\n<@U01>");
    }
}
