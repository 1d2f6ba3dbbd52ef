//! Tagged clustering strategy, selected at configuration time.

use std::fmt;

use curator_core::config::{PartitionConfig, StrategyKind};

/// Which clustering family to run and with which parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClusteringStrategy {
    /// Count-parameterised clustering (k-means style).
    Partitional { k: usize },
    /// Density-based clustering (DBSCAN style).
    DensityBased { eps: f64, min_pts: usize },
}

impl ClusteringStrategy {
    pub fn from_config(config: &PartitionConfig) -> Self {
        match config.strategy {
            StrategyKind::Partitional => Self::Partitional {
                k: config.cluster_count,
            },
            StrategyKind::Density => Self::DensityBased {
                eps: config.eps,
                min_pts: config.min_pts,
            },
        }
    }

    /// Same strategy with a different requested cluster count.
    /// Density-based strategies discover their own count and are unchanged.
    pub fn with_cluster_count(self, k: usize) -> Self {
        match self {
            Self::Partitional { .. } => Self::Partitional { k },
            other => other,
        }
    }

    /// Whether a population of `population` objects skips the primitive
    /// and lands in one sorted cluster: a single object, or `k < 2`.
    pub fn bypasses_primitive(&self, population: usize) -> bool {
        population == 1 || matches!(self, Self::Partitional { k } if *k < 2)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Partitional { .. } => "partitional",
            Self::DensityBased { .. } => "density",
        }
    }
}

impl fmt::Display for ClusteringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partitional { k } => write!(f, "partitional(k={k})"),
            Self::DensityBased { eps, min_pts } => {
                write!(f, "density(eps={eps}, min_pts={min_pts})")
            }
        }
    }
}
