pub mod app;
pub mod args;
pub mod clients;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod event;
pub mod logging;
pub mod notification;
pub mod pool;
pub mod reporter;
pub mod selection;
pub mod types;

// Re-export commonly used items for convenience
pub use config::{ActionConfig, SelectionConfig};
pub use errors::AppError;
pub use selection::{select_reviewers, select_reviewers_with_rng, SelectionResult, Strategy};
pub use types::{PullRequestContext, Reviewer, ReviewerPool};
