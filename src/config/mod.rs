pub mod action_config;
pub mod selection_config;

pub use action_config::ActionConfig;
pub use selection_config::{SelectionConfig, TeamQuota, MAX_REVIEWERS};
