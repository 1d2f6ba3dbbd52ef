//! ReviewSession: the facade a host drives during active learning.
//!
//! A new partition is always computed before anything live is touched, so
//! a failed partition leaves the previous map and scheduler serving.

use std::sync::Arc;

use curator_clustering::{
    ClusterMap, ClusterSummary, ClusteringStrategy, DbscanClusterer, FeatureExtractor,
    HdbscanClusterer, KMeansClusterer, Partitioner, PcaReducer,
};
use curator_core::config::{DensityPrimitive, ProposalMode};
use curator_core::errors::CuratorResult;
use curator_core::traits::{DensityClusterer, MeasurementLookup, PopulationSource};
use curator_core::tracing::init_tracing;
use curator_core::{ClassLabel, Confidence, CuratorConfig, DomainObject};
use curator_scheduler::{RandomScheduler, RoundRobinScheduler, SampleProposal, ServeOutcome};
use curator_training::{CommitOutcome, TrainingSetIntegrator};
use tracing::{info, warn};

use crate::dependencies::SessionDependencies;
use crate::filter::PopulationFilter;
use crate::progress::SessionProgress;

/// One interactive review session.
///
/// Mutating operations take `&mut self`; a host sharing a session across
/// threads wraps it in a mutex.
pub struct ReviewSession {
    config: CuratorConfig,
    population: Arc<dyn PopulationSource>,
    measurements: Arc<dyn MeasurementLookup>,
    partitioner: Partitioner,
    integrator: TrainingSetIntegrator,
    filter: PopulationFilter,
    strategy: ClusteringStrategy,
    scheduler: Box<dyn SampleProposal>,
    served: usize,
    commits: usize,
    commits_since_recluster: usize,
    current_cluster: Option<usize>,
}

impl ReviewSession {
    /// Build an idle session. Nothing is partitioned until
    /// [`initialize`](Self::initialize).
    pub fn new(deps: SessionDependencies, config: CuratorConfig) -> CuratorResult<Self> {
        CuratorConfig::validate(&config)?;
        init_tracing(&config.observability.log_level);

        let partitional = deps
            .partitional
            .unwrap_or_else(|| Box::new(KMeansClusterer::from_config(&config.partition)));
        let density = deps.density.unwrap_or_else(|| default_density(&config));
        let mut partitioner = Partitioner::new()
            .with_partitional(partitional)
            .with_density(density);
        if config.partition.reduce_dimensions {
            let reducer = deps
                .reducer
                .unwrap_or_else(|| Box::new(PcaReducer::new(config.partition.components)));
            partitioner = partitioner.with_reducer(reducer);
        }

        let mut integrator =
            TrainingSetIntegrator::new(deps.annotations, &config.training, &config.population);
        integrator.set_origin(deps.origin);

        let strategy = ClusteringStrategy::from_config(&config.partition);
        Ok(Self {
            filter: PopulationFilter::from_config(&config.population),
            scheduler: proposal(&config),
            population: deps.population,
            measurements: deps.measurements,
            partitioner,
            integrator,
            strategy,
            config,
            served: 0,
            commits: 0,
            commits_since_recluster: 0,
            current_cluster: None,
        })
    }

    /// Partition the current population into `cluster_count` clusters and
    /// start serving.
    pub fn initialize(&mut self, cluster_count: usize) -> CuratorResult<ClusterSummary> {
        self.scheduler.set_cluster_count(cluster_count);
        self.recluster()
    }

    /// Next object to review, with the cluster it came from.
    pub fn serve_next(&mut self) -> ServeOutcome {
        let outcome = self.scheduler.serve_next();
        if let ServeOutcome::Next(served) = &outcome {
            self.served += 1;
            self.current_cluster = Some(served.cluster_id);
        }
        outcome
    }

    /// Re-partition the current population snapshot and rebuild the
    /// scheduler. On error nothing live changes.
    pub fn recluster(&mut self) -> CuratorResult<ClusterSummary> {
        let map = self.prepare_partition()?;
        Ok(self.install_partition(map))
    }

    /// Compute a partition of the current snapshot without touching the
    /// live state. Safe to run off the interactive thread.
    pub fn prepare_partition(&self) -> CuratorResult<ClusterMap> {
        let snapshot = self.population.snapshot()?;
        let total = snapshot.len();
        let objects = self.filter.apply(snapshot);
        info!(
            snapshot = total,
            reviewable = objects.len(),
            "population snapshot taken"
        );

        let strategy = self.current_strategy();
        let extractor =
            FeatureExtractor::from_config(&self.config.features, self.measurements.as_ref(), &objects);
        let objects: Vec<Arc<DomainObject>> = objects.into_iter().map(Arc::new).collect();
        let units = self.partitioner.build_units(
            &objects,
            &extractor,
            self.measurements.as_ref(),
            &strategy,
        )?;

        Ok(self.partitioner.partition(&units, &strategy)?)
    }

    /// Publish a partition computed by [`prepare_partition`](Self::prepare_partition).
    pub fn install_partition(&mut self, map: ClusterMap) -> ClusterSummary {
        let summary = map.summary();
        info!(summary = %summary, "installing partition");
        self.scheduler.build(Arc::new(map));
        self.commits_since_recluster = 0;
        self.current_cluster = None;
        summary
    }

    /// Record the reviewer's decision for `object`.
    ///
    /// Once the training set accepts the commit it counts, whatever happens
    /// after. With `mark_reviewed_confident`, the object is then re-labelled
    /// in the population with confidence 1.0; a failed re-label is logged
    /// and the next partition sees the old confidence. With
    /// `recluster_after_commits = N`, every N-th commit re-partitions; a
    /// failure there is logged and the previous partition keeps serving.
    pub fn commit_review(
        &mut self,
        object: &DomainObject,
        class: Option<ClassLabel>,
    ) -> CuratorResult<CommitOutcome> {
        let outcome = self.integrator.commit(object, class.as_ref())?;
        self.commits += 1;
        self.commits_since_recluster += 1;

        if self.config.session.mark_reviewed_confident {
            if let Some(class) = &class {
                if let Err(e) =
                    self.population
                        .set_classification(&object.id, class, Confidence::REVIEWED)
                {
                    warn!(object_id = %object.id, error = %e, "could not mark reviewed object confident");
                }
            }
        }

        let every = self.config.session.recluster_after_commits;
        if every > 0 && self.commits_since_recluster >= every {
            if let Err(e) = self.recluster() {
                warn!(error = %e, commits = self.commits, "automatic recluster failed, keeping previous partition");
            }
        }
        Ok(outcome)
    }

    /// Accept the object's current classification.
    pub fn confirm(&mut self, object: &DomainObject) -> CuratorResult<CommitOutcome> {
        self.commit_review(object, object.class.clone())
    }

    /// Change the requested cluster count. Reclusters immediately when the
    /// session is configured to; otherwise applies from the next recluster.
    pub fn set_cluster_count(&mut self, k: usize) -> CuratorResult<Option<ClusterSummary>> {
        self.scheduler.set_cluster_count(k);
        if self.config.session.recluster_on_count_change {
            return self.recluster().map(Some);
        }
        Ok(None)
    }

    /// Hook for host hierarchy changes.
    pub fn on_population_changed(&mut self) -> CuratorResult<ClusterSummary> {
        self.recluster()
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            served: self.served,
            commits: self.commits,
            cluster_count: self.scheduler.cluster_count(),
            current_cluster: self.current_cluster,
            remaining: self.scheduler.remaining(),
            state: self.scheduler.state(),
        }
    }

    /// Live partition.
    pub fn cluster_map(&self) -> &Arc<ClusterMap> {
        self.scheduler.map()
    }

    /// Strategy the next partition will use. Sorted and random proposals
    /// never cluster, so they always get the single-cluster bypass.
    pub fn current_strategy(&self) -> ClusteringStrategy {
        match self.config.session.proposal {
            ProposalMode::Clustered => self
                .strategy
                .with_cluster_count(self.scheduler.requested_cluster_count()),
            ProposalMode::Sorted | ProposalMode::Random => {
                ClusteringStrategy::Partitional { k: 1 }
            }
        }
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }
}

fn default_density(config: &CuratorConfig) -> Box<dyn DensityClusterer> {
    match config.partition.density_primitive {
        DensityPrimitive::Dbscan => Box::new(DbscanClusterer::new()),
        DensityPrimitive::Hdbscan => Box::new(HdbscanClusterer::new()),
    }
}

fn proposal(config: &CuratorConfig) -> Box<dyn SampleProposal> {
    let k = config.partition.cluster_count;
    match config.session.proposal {
        ProposalMode::Clustered | ProposalMode::Sorted => Box::new(RoundRobinScheduler::new(k)),
        ProposalMode::Random => match config.session.random_seed {
            Some(seed) => Box::new(RandomScheduler::seeded(k, seed)),
            None => Box::new(RandomScheduler::from_entropy(k)),
        },
    }
}
