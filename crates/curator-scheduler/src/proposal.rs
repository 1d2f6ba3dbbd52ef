//! The seam between the session and whatever decides what to serve next.

use std::sync::Arc;

use curator_clustering::ClusterMap;

use crate::outcome::{SchedulerState, ServeOutcome};

/// A serve strategy over a built [`ClusterMap`].
///
/// Implementations keep no reference to the population itself; a rebuild
/// hands them a fresh map and they start over from it.
pub trait SampleProposal: Send {
    /// Replace the live map and reset serving state.
    fn build(&mut self, map: Arc<ClusterMap>);

    /// Next object to review.
    fn serve_next(&mut self) -> ServeOutcome;

    /// Requested cluster count for the next build.
    fn set_cluster_count(&mut self, k: usize);
    fn requested_cluster_count(&self) -> usize;

    fn state(&self) -> SchedulerState;

    /// Live cluster count.
    fn cluster_count(&self) -> usize;

    fn map(&self) -> &Arc<ClusterMap>;

    /// Objects not yet served since the last build.
    fn remaining(&self) -> usize;

    fn name(&self) -> &str;
}
