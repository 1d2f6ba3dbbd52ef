use curator_scheduler::SchedulerState;
use serde::Serialize;

/// Snapshot of a session for progress displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    /// Fresh objects served since the session started.
    pub served: usize,
    /// Successful commits since the session started.
    pub commits: usize,
    /// Live cluster count.
    pub cluster_count: usize,
    /// Cluster of the most recently served object.
    pub current_cluster: Option<usize>,
    /// Objects not yet served from the live partition.
    pub remaining: usize,
    pub state: SchedulerState,
}
