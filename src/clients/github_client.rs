use crate::errors::AssignmentError;
use crate::types::Repository;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!("assign-reviewers/", env!("CARGO_PKG_VERSION"));
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Hosting side of the assignment: "request these reviewers on PR #N".
#[async_trait]
pub trait ReviewRequester: Send + Sync {
    async fn request_reviewers(
        &self,
        repository: &Repository,
        pull_number: u64,
        reviewers: &[String],
    ) -> Result<(), AssignmentError>;
}

#[derive(Debug, Serialize)]
struct RequestReviewersBody<'a> {
    reviewers: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

#[derive(Debug)]
pub struct GitHubClient {
    base_url: String,
    token: String,
    client: Client,
}

impl GitHubClient {
    pub fn new(base_url: String, token: String) -> Self {
        GitHubClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    fn requested_reviewers_url(&self, repository: &Repository, pull_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/requested_reviewers",
            self.base_url, repository.owner, repository.name, pull_number
        )
    }
}

#[async_trait]
impl ReviewRequester for GitHubClient {
    async fn request_reviewers(
        &self,
        repository: &Repository,
        pull_number: u64,
        reviewers: &[String],
    ) -> Result<(), AssignmentError> {
        let url = self.requested_reviewers_url(repository, pull_number);
        tracing::debug!(%url, reviewers = ?reviewers, "Requesting reviewers");

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, USER_AGENT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .json(&RequestReviewersBody { reviewers })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        Err(match status {
            StatusCode::UNAUTHORIZED => AssignmentError::AuthenticationError,
            StatusCode::FORBIDDEN => AssignmentError::Forbidden(message),
            StatusCode::NOT_FOUND => AssignmentError::PullRequestNotFound {
                number: pull_number,
            },
            StatusCode::UNPROCESSABLE_ENTITY => AssignmentError::Rejected(message),
            s => AssignmentError::ServerError {
                status_code: s.as_u16(),
                message,
            },
        })
    }
}

/// Extracts GitHub's `message` (plus any `errors` details) from an error response body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<GitHubErrorBody>(body) {
        Ok(parsed) if parsed.errors.is_empty() => parsed.message,
        Ok(parsed) => {
            let details: Vec<String> = parsed
                .errors
                .iter()
                .map(|e| match e {
                    serde_json::Value::String(s) => s.clone(),
                    other => other
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| other.to_string()),
                })
                .collect();
            format!("{} ({})", parsed.message, details.join("; "))
        }
        Err(_) => body.trim().to_string(),
    }
}
