pub mod github_client;
pub mod slack_client;

#[cfg(test)]
mod github_client_tests;

pub use github_client::{GitHubClient, ReviewRequester};
pub use slack_client::{Notifier, SlackWebhook};
