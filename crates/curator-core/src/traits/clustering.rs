use std::collections::BTreeMap;

use crate::object::ClusterableUnit;

/// Count-parameterised clustering (k-means style).
///
/// Returns cluster id → indices into `units`. Every index must appear
/// exactly once.
pub trait PartitionalClusterer: Send + Sync {
    fn cluster(
        &self,
        count: usize,
        units: &[ClusterableUnit],
    ) -> Result<BTreeMap<usize, Vec<usize>>, String>;

    /// Human-readable primitive name.
    fn name(&self) -> &str;
}

/// Density-based clustering (DBSCAN style).
///
/// Returns clusters as index lists into `units`. Indices that appear in no
/// cluster are noise.
pub trait DensityClusterer: Send + Sync {
    fn cluster(
        &self,
        eps: f64,
        min_pts: usize,
        units: &[ClusterableUnit],
    ) -> Result<Vec<Vec<usize>>, String>;

    /// Human-readable primitive name.
    fn name(&self) -> &str;
}
