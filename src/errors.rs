use thiserror::Error;

/// Top level error for a single run. Each variant maps to the pipeline step it came from.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed event payload: {0}")]
    MalformedEvent(#[from] EventError),
    #[error("Failed to load reviewer pool: {0}")]
    PoolParse(#[from] PoolError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Reviewer assignment failed: {0}")]
    Assignment(#[from] AssignmentError),
    #[error("Notification failed after reviewers were assigned: {0}")]
    Notification(#[from] NotificationError),
}

impl AppError {
    /// 出错的流水线步骤名，用于失败报告的标题
    pub fn step(&self) -> &'static str {
        match self {
            AppError::MalformedEvent(_) => "event",
            AppError::PoolParse(_) => "pool",
            AppError::Config(_) => "config",
            AppError::Assignment(_) => "assignment",
            AppError::Notification(_) => "notification",
        }
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to read event file '{0}': {1}")]
    FileRead(String, #[source] std::io::Error),
    #[error("Event payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Required event field '{0}' is missing")]
    FieldMissing(&'static str),
    #[error("Repository identity is unavailable (GITHUB_REPOSITORY unset and payload has no repository)")]
    RepositoryMissing,
    #[error("Invalid repository identifier '{0}', expected 'owner/name'")]
    InvalidRepository(String),
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to read file '{0}': {1}")]
    FileRead(String, #[source] std::io::Error),
    #[error("Invalid JSON in '{0}': {1}")]
    InvalidJson(String, #[source] serde_json::Error),
    #[error("Top level of '{0}' must be a JSON object")]
    NotAnObject(String),
    #[error("Pool entry '{key}' is invalid: {reason}")]
    InvalidEntry { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration field '{0}' is missing or invalid")]
    FieldMissing(String),
    #[error("Malformed reviewer class segment '{segment}': {reason}")]
    MalformedQuota { segment: String, reason: String },
    #[error("Wrong url format: {0}")]
    InvalidUrl(String),
    #[error("Empty token")]
    EmptyToken,
}

#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Authentication failed: invalid or missing token")]
    AuthenticationError,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Pull request #{number} not found")]
    PullRequestNotFound { number: u64 },
    #[error("Reviewers rejected: {0}")]
    Rejected(String),
    #[error("Server error: {status_code}: {message}")]
    ServerError { status_code: u16, message: String },
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Webhook rejected the message with status {status_code}: {body}")]
    Rejected { status_code: u16, body: String },
}

/// Creates a missing-field configuration error.
pub fn config_error(field: impl Into<String>) -> ConfigError {
    ConfigError::FieldMissing(field.into())
}
