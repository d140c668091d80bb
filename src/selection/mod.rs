//! Reviewer selection engine.
//!
//! Exactly one strategy applies per run, checked in this order:
//!
//! 1. `default_label` set: draw `number_of_reviewers` from that pool entry.
//! 2. `class_of_reviewers` set: draw each team's quota independently and concatenate
//!    in the order the teams were listed.
//! 3. The triggering label is a pool key: draw `number_of_reviewers` from it.
//! 4. Otherwise nothing is selected.
//!
//! The pull request author is removed from every draw.

pub mod sampling;

use crate::config::SelectionConfig;
use crate::types::{PullRequestContext, Reviewer, ReviewerPool};
use rand::Rng;
use std::fmt;

pub use sampling::draw;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DefaultPool,
    TeamQuota,
    LabelPool,
    None,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::DefaultPool => "default-pool",
            Strategy::TeamQuota => "team-quota",
            Strategy::LabelPool => "label-pool",
            Strategy::None => "none",
        };
        f.write_str(name)
    }
}

/// Reviewers picked for one pull request, in assignment order.
///
/// Under [`Strategy::TeamQuota`] the same person may appear once per team that drew them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub strategy: Strategy,
    pub reviewers: Vec<Reviewer>,
}

impl SelectionResult {
    fn empty() -> Self {
        Self {
            strategy: Strategy::None,
            reviewers: Vec::new(),
        }
    }

    pub fn handles(&self) -> Vec<String> {
        self.reviewers.iter().map(|r| r.handle.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty()
    }
}

/// Selects reviewers using the thread-local RNG.
pub fn select_reviewers(
    pool: &ReviewerPool,
    context: &PullRequestContext,
    config: &SelectionConfig,
) -> SelectionResult {
    select_reviewers_with_rng(pool, context, config, &mut rand::thread_rng())
}

pub fn select_reviewers_with_rng<R: Rng + ?Sized>(
    pool: &ReviewerPool,
    context: &PullRequestContext,
    config: &SelectionConfig,
    rng: &mut R,
) -> SelectionResult {
    let author = context.author.as_str();

    if let Some(key) = config.default_pool_key.as_deref().filter(|k| !k.is_empty()) {
        let reviewers = match pool.get(key) {
            Some(candidates) => draw(candidates, author, config.requested_count, rng),
            None => {
                tracing::warn!(group = %key, "default_label does not match any reviewer group");
                Vec::new()
            }
        };
        return SelectionResult {
            strategy: Strategy::DefaultPool,
            reviewers,
        };
    }

    if let Some(quotas) = &config.team_quotas {
        let mut reviewers = Vec::new();
        for quota in quotas {
            match pool.get(&quota.team) {
                Some(candidates) => {
                    let drawn = draw(candidates, author, quota.quota, rng);
                    tracing::debug!(team = %quota.team, quota = quota.quota, drawn = drawn.len(), "Team drawn");
                    reviewers.extend(drawn);
                }
                None => {
                    tracing::warn!(team = %quota.team, "class_of_reviewers names a team missing from the pool");
                }
            }
        }
        return SelectionResult {
            strategy: Strategy::TeamQuota,
            reviewers,
        };
    }

    if let Some(candidates) = pool.get(&context.label) {
        return SelectionResult {
            strategy: Strategy::LabelPool,
            reviewers: draw(candidates, author, config.requested_count, rng),
        };
    }

    tracing::info!(label = %context.label, "No reviewer group matches the label");
    SelectionResult::empty()
}
