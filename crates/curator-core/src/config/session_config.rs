use serde::{Deserialize, Serialize};

use super::defaults;

/// How the session picks the next object to review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalMode {
    /// Round-robin over clusters, least certain first within each.
    Clustered,
    /// Least certain first over the whole population, no clustering.
    Sorted,
    /// Uniformly random without repeats, no clustering.
    Random,
}

/// Review session policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub proposal: ProposalMode,
    /// Seed for the random proposal. Unset draws from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Recluster after this many commits. 0 disables.
    pub recluster_after_commits: usize,
    /// Recluster immediately when the requested cluster count changes.
    pub recluster_on_count_change: bool,
    /// Write the reviewed class back with confidence 1.0 after a commit.
    pub mark_reviewed_confident: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            proposal: ProposalMode::Clustered,
            random_seed: None,
            recluster_after_commits: defaults::DEFAULT_RECLUSTER_AFTER_COMMITS,
            recluster_on_count_change: defaults::DEFAULT_RECLUSTER_ON_COUNT_CHANGE,
            mark_reviewed_confident: defaults::DEFAULT_MARK_REVIEWED_CONFIDENT,
        }
    }
}
