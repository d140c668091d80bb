//! Reads the `pull_request` labeled event that GitHub writes to `GITHUB_EVENT_PATH`.

use crate::errors::EventError;
use crate::types::{PullRequestContext, Repository};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
    label: Option<LabelPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    html_url: String,
    user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: UserPayload,
}

/// Parsed event: the pull request snapshot plus the repository it lives in.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub repository: Repository,
    pub pull_request: PullRequestContext,
}

impl EventContext {
    /// Reads and parses the event file.
    ///
    /// `repository_override` is the `owner/name` value of `GITHUB_REPOSITORY`; it takes
    /// precedence over the payload's `repository` object.
    pub fn from_file(path: &Path, repository_override: Option<&str>) -> Result<Self, EventError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| EventError::FileRead(path.display().to_string(), e))?;
        Self::from_json(&raw, repository_override)
    }

    pub fn from_json(raw: &str, repository_override: Option<&str>) -> Result<Self, EventError> {
        let payload: EventPayload = serde_json::from_str(raw).map_err(EventError::InvalidJson)?;

        let pr = payload
            .pull_request
            .ok_or(EventError::FieldMissing("pull_request"))?;
        let label = payload.label.ok_or(EventError::FieldMissing("label"))?;
        let user = pr.user.ok_or(EventError::FieldMissing("pull_request.user"))?;

        let repository = match repository_override {
            Some(full_name) => parse_repository(full_name)?,
            None => payload
                .repository
                .map(|r| Repository {
                    owner: r.owner.login,
                    name: r.name,
                })
                .ok_or(EventError::RepositoryMissing)?,
        };

        Ok(Self {
            repository,
            pull_request: PullRequestContext {
                number: pr.number,
                title: pr.title,
                url: pr.html_url,
                author: user.login,
                label: label.name,
            },
        })
    }
}

/// Splits `owner/name` the way `GITHUB_REPOSITORY` is formatted.
pub fn parse_repository(full_name: &str) -> Result<Repository, EventError> {
    match full_name.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(EventError::InvalidRepository(full_name.to_string())),
    }
}
