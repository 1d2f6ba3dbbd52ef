//! Round-robin over cluster cursors.
//!
//! Visits clusters in ascending id order from the pointer, wrapping at the
//! live cluster count. Exhausted clusters stay in the rotation and are
//! skipped. Member order is fixed when the map is built; later
//! confidence changes are only picked up by the next [`build`](RoundRobinScheduler::build).

use std::sync::Arc;

use curator_clustering::ClusterMap;
use curator_core::tracing::events;
use tracing::{debug, info};

use crate::cursor::Cursor;
use crate::outcome::{SchedulerState, ServeOutcome, Served};
use crate::proposal::SampleProposal;

/// Serves one object at a time, spreading attention across clusters.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    map: Arc<ClusterMap>,
    cursors: Vec<Cursor>,
    pointer: usize,
    state: SchedulerState,
    last_served: Option<Served>,
    requested_k: usize,
}

impl RoundRobinScheduler {
    /// Idle scheduler remembering `requested_k` for the next partition.
    pub fn new(requested_k: usize) -> Self {
        Self {
            map: Arc::new(ClusterMap::empty()),
            cursors: Vec::new(),
            pointer: 0,
            state: SchedulerState::Idle,
            last_served: None,
            requested_k,
        }
    }

    /// Cluster id that the next sweep starts from.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn last_served(&self) -> Option<&Served> {
        self.last_served.as_ref()
    }
}

impl SampleProposal for RoundRobinScheduler {
    /// Replace the live map. One fresh cursor per cluster, pointer reset.
    /// The last served object survives so an immediately exhausted map can
    /// still return it.
    fn build(&mut self, map: Arc<ClusterMap>) {
        self.cursors = (0..map.len()).map(Cursor::new).collect();
        self.pointer = 0;
        self.state = SchedulerState::Ready;
        info!(
            clusters = map.len(),
            population = map.population(),
            "scheduler built"
        );
        self.map = map;
    }

    fn serve_next(&mut self) -> ServeOutcome {
        if self.state == SchedulerState::Idle {
            return ServeOutcome::NothingAvailable;
        }

        let k = self.cursors.len();
        for _ in 0..k {
            let cluster_id = self.pointer;
            self.pointer = (self.pointer + 1) % k;

            let cursor = &mut self.cursors[cluster_id];
            match cursor.advance(&self.map) {
                Some(object) => {
                    let served = Served {
                        object,
                        cluster_id,
                        cluster_count: k,
                    };
                    events::sample_served(served.object.id.as_str(), cluster_id, k);
                    self.state = SchedulerState::Ready;
                    self.last_served = Some(served.clone());
                    return ServeOutcome::Next(served);
                }
                None => {
                    debug!(cluster = cluster_id, consumed = cursor.consumed(), "cursor exhausted");
                }
            }
        }

        if self.state != SchedulerState::Exhausted {
            info!(clusters = k, "every cluster drained");
        }
        self.state = SchedulerState::Exhausted;
        match &self.last_served {
            Some(last) => ServeOutcome::Exhausted(last.clone()),
            None => ServeOutcome::NothingAvailable,
        }
    }

    /// The live map keeps its k until the next build.
    fn set_cluster_count(&mut self, k: usize) {
        self.requested_k = k;
    }

    fn requested_cluster_count(&self) -> usize {
        self.requested_k
    }

    fn state(&self) -> SchedulerState {
        self.state
    }

    fn cluster_count(&self) -> usize {
        self.cursors.len()
    }

    fn map(&self) -> &Arc<ClusterMap> {
        &self.map
    }

    fn remaining(&self) -> usize {
        self.cursors
            .iter()
            .map(|c| {
                self.map
                    .cluster(c.cluster_id())
                    .map_or(0, |members| members.len().saturating_sub(c.consumed()))
            })
            .sum()
    }

    fn name(&self) -> &str {
        "round_robin"
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(0)
    }
}
