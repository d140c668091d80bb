pub mod pull_request;
pub mod reviewer;

pub use pull_request::{PullRequestContext, Repository};
pub use reviewer::{Reviewer, ReviewerPool};
