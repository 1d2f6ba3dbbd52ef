use serde::{Deserialize, Serialize};

use super::defaults;

/// Which clustering family the partitioner dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Partitional,
    Density,
}

/// Built-in density primitive used when the host injects none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityPrimitive {
    /// Fixed-radius DBSCAN; honours `eps`.
    Dbscan,
    /// Hierarchical DBSCAN; has no radius and rejects an explicit `eps`.
    Hdbscan,
}

/// Partition subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    pub strategy: StrategyKind,
    /// Requested cluster count for partitional clustering.
    pub cluster_count: usize,
    /// Neighbourhood radius for density clustering.
    pub eps: f64,
    pub density_primitive: DensityPrimitive,
    /// Minimum neighbourhood size for density clustering.
    pub min_pts: usize,
    /// Project features before clustering when they exceed `components`.
    pub reduce_dimensions: bool,
    pub components: usize,
    /// Lloyd iteration cap for the built-in k-means.
    pub max_iterations: usize,
    /// Seed for k-means++ initialisation. Unset draws from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Partitional,
            cluster_count: defaults::DEFAULT_CLUSTER_COUNT,
            eps: defaults::DEFAULT_EPS,
            density_primitive: DensityPrimitive::Dbscan,
            min_pts: defaults::DEFAULT_MIN_PTS,
            reduce_dimensions: defaults::DEFAULT_REDUCE_DIMENSIONS,
            components: defaults::DEFAULT_COMPONENTS,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}
