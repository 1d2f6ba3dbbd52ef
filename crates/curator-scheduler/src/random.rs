//! Uniformly random serving without repeats.
//!
//! Ignores cluster structure for ordering: every object of the map is
//! equally likely at each step, and each is served at most once per build.
//! The generator is injected, so a seeded one gives a reproducible order.

use std::sync::Arc;

use curator_clustering::ClusterMap;
use curator_core::tracing::events;
use curator_core::DomainObject;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::outcome::{SchedulerState, ServeOutcome, Served};
use crate::proposal::SampleProposal;

/// Serves a random not-yet-served object from the live map.
#[derive(Debug)]
pub struct RandomScheduler {
    map: Arc<ClusterMap>,
    pool: Vec<(Arc<DomainObject>, usize)>,
    rng: StdRng,
    state: SchedulerState,
    last_served: Option<Served>,
    requested_k: usize,
}

impl RandomScheduler {
    /// Idle scheduler drawing from `rng`.
    pub fn new(requested_k: usize, rng: StdRng) -> Self {
        Self {
            map: Arc::new(ClusterMap::empty()),
            pool: Vec::new(),
            rng,
            state: SchedulerState::Idle,
            last_served: None,
            requested_k,
        }
    }

    pub fn seeded(requested_k: usize, seed: u64) -> Self {
        Self::new(requested_k, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(requested_k: usize) -> Self {
        Self::new(requested_k, StdRng::from_entropy())
    }

    pub fn last_served(&self) -> Option<&Served> {
        self.last_served.as_ref()
    }
}

impl SampleProposal for RandomScheduler {
    fn build(&mut self, map: Arc<ClusterMap>) {
        self.pool = map
            .iter()
            .flat_map(|(id, members)| members.iter().map(move |u| (Arc::clone(u.object()), id)))
            .collect();
        self.state = SchedulerState::Ready;
        info!(population = self.pool.len(), "random scheduler built");
        self.map = map;
    }

    fn serve_next(&mut self) -> ServeOutcome {
        if self.state == SchedulerState::Idle {
            return ServeOutcome::NothingAvailable;
        }
        if self.pool.is_empty() {
            self.state = SchedulerState::Exhausted;
            return match &self.last_served {
                Some(last) => ServeOutcome::Exhausted(last.clone()),
                None => ServeOutcome::NothingAvailable,
            };
        }

        let pick = self.rng.gen_range(0..self.pool.len());
        let (object, cluster_id) = self.pool.swap_remove(pick);
        let served = Served {
            object,
            cluster_id,
            cluster_count: self.map.len(),
        };
        events::sample_served(served.object.id.as_str(), cluster_id, self.map.len());
        self.state = SchedulerState::Ready;
        self.last_served = Some(served.clone());
        ServeOutcome::Next(served)
    }

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
        self.map.len()
    }

    fn map(&self) -> &Arc<ClusterMap> {
        &self.map
    }

    fn remaining(&self) -> usize {
        self.pool.len()
    }

    fn name(&self) -> &str {
        "random"
    }
}
