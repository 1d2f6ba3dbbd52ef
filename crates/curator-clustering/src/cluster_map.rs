//! Immutable cluster map: cluster id → members in review order.

use std::fmt;

use curator_core::{ClusterableUnit, ObjectId};

/// Partition of a population into numbered clusters.
///
/// Ids are contiguous `0..len()`, no cluster is empty, and every cluster is
/// sorted by [`Confidence::review_order`](curator_core::Confidence::review_order).
/// Built wholesale by the partitioner; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClusterMap {
    clusters: Vec<Vec<ClusterableUnit>>,
    strategy: String,
    bypassed: bool,
}

impl ClusterMap {
    /// Map with nothing to serve.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Drop empty clusters, relabel contiguously in the given order, and
    /// sort each cluster least-certain first.
    pub(crate) fn from_clusters(
        clusters: Vec<Vec<ClusterableUnit>>,
        strategy: impl Into<String>,
        bypassed: bool,
    ) -> Self {
        let clusters = clusters
            .into_iter()
            .filter(|c| !c.is_empty())
            .map(|mut c| {
                c.sort_by(|a, b| {
                    a.object()
                        .confidence
                        .review_order(b.object().confidence)
                });
                c
            })
            .collect();
        Self {
            clusters,
            strategy: strategy.into(),
            bypassed,
        }
    }

    /// Number of clusters (k).
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of objects across all clusters.
    pub fn population(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    pub fn cluster(&self, id: usize) -> Option<&[ClusterableUnit]> {
        self.clusters.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ClusterableUnit])> {
        self.clusters.iter().enumerate().map(|(i, c)| (i, c.as_slice()))
    }

    /// Cluster id holding object `id`.
    pub fn cluster_of(&self, id: &ObjectId) -> Option<usize> {
        self.clusters
            .iter()
            .position(|c| c.iter().any(|u| &u.object().id == id))
    }

    /// Feature points of one cluster, for scatter-plot progress displays.
    pub fn points(&self, id: usize) -> Vec<&[f64]> {
        self.cluster(id)
            .map(|c| c.iter().map(ClusterableUnit::point).collect())
            .unwrap_or_default()
    }

    /// Strategy label that produced this map.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Whether the clustering primitive was skipped (trivial input or k < 2).
    pub fn bypassed(&self) -> bool {
        self.bypassed
    }

    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            strategy: self.strategy.clone(),
            sizes: self.clusters.iter().map(Vec::len).collect(),
        }
    }
}

/// How many objects landed in how many clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSummary {
    pub strategy: String,
    pub sizes: Vec<usize>,
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sizes.is_empty() {
            return write!(f, "Clustering using {} produced no clusters.", self.strategy);
        }
        writeln!(f, "Clustering using {} finished:", self.strategy)?;
        for (id, size) in self.sizes.iter().enumerate() {
            writeln!(f, "\tCluster {id}: {size}")?;
        }
        Ok(())
    }
}
