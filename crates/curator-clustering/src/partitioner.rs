//! Cluster Partitioner: clusterable units → [`ClusterMap`].
//!
//! Two-level ordering: the clustering primitive decides *which* cluster an
//! object belongs to (diversity), then each cluster is sorted least-certain
//! first (urgency).

use std::collections::BTreeMap;
use std::sync::Arc;

use curator_core::errors::PartitionError;
use curator_core::partition_span;
use curator_core::traits::{
    DensityClusterer, DimensionalityReducer, MeasurementLookup, PartitionalClusterer,
};
use curator_core::tracing::events;
use curator_core::{ClusterableUnit, DomainObject, FeatureVector};
use tracing::{debug, info, warn};

use crate::cluster_map::ClusterMap;
use crate::features::FeatureExtractor;
use crate::strategy::ClusteringStrategy;
use crate::unit;

/// Label given to maps built without calling a primitive.
const SINGLE_CLUSTER: &str = "sorted";

/// Dispatches a [`ClusteringStrategy`] to the matching injected primitive.
#[derive(Default)]
pub struct Partitioner {
    partitional: Option<Box<dyn PartitionalClusterer>>,
    density: Option<Box<dyn DensityClusterer>>,
    reducer: Option<Box<dyn DimensionalityReducer>>,
}

impl Partitioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partitional(mut self, clusterer: Box<dyn PartitionalClusterer>) -> Self {
        self.partitional = Some(clusterer);
        self
    }

    pub fn with_density(mut self, clusterer: Box<dyn DensityClusterer>) -> Self {
        self.density = Some(clusterer);
        self
    }

    pub fn with_reducer(mut self, reducer: Box<dyn DimensionalityReducer>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Extract features for `objects`, check they agree in length, and
    /// project them through the reducer when the feature space is wider
    /// than its target.
    ///
    /// When `strategy` bypasses the primitive for this population the
    /// features are never read, so neither check nor reduction runs.
    pub fn build_units(
        &self,
        objects: &[Arc<DomainObject>],
        extractor: &FeatureExtractor,
        lookup: &dyn MeasurementLookup,
        strategy: &ClusteringStrategy,
    ) -> Result<Vec<ClusterableUnit>, PartitionError> {
        let units = unit::build_units(objects, extractor, lookup);
        if strategy.bypasses_primitive(units.len()) {
            return Ok(units);
        }
        check_lengths(&units)?;

        let Some(reducer) = self.reducer.as_deref() else {
            return Ok(units);
        };
        let dims = units.first().map(|u| u.features().len()).unwrap_or(0);
        if units.len() < 2 || dims <= reducer.components() {
            return Ok(units);
        }

        let rows: Vec<Vec<f64>> = units.iter().map(|u| u.point().to_vec()).collect();
        let reduced = reducer
            .reduce(&rows)
            .map_err(|reason| PartitionError::ReductionFailed { reason })?;
        if reduced.len() != units.len() {
            return Err(PartitionError::ReductionFailed {
                reason: format!("expected {} rows, got {}", units.len(), reduced.len()),
            });
        }
        debug!(from = dims, to = reducer.components(), "reduced feature space");

        Ok(units
            .into_iter()
            .zip(reduced)
            .map(|(u, row)| unit::wrap_vector(Arc::clone(u.object()), FeatureVector::new(row)))
            .collect())
    }

    /// Partition `units` with `strategy`.
    ///
    /// Empty input gives an empty map. A single unit, or a partitional
    /// strategy with `k < 2`, skips the primitive and returns one sorted
    /// cluster. Primitive errors are returned as-is; nothing is retried.
    pub fn partition(
        &self,
        units: &[ClusterableUnit],
        strategy: &ClusteringStrategy,
    ) -> Result<ClusterMap, PartitionError> {
        let _span = partition_span!(strategy, units.len()).entered();

        if units.is_empty() {
            info!("empty population, nothing to partition");
            return Ok(ClusterMap::empty());
        }

        // Features are irrelevant to the bypass, so shape is checked after it.
        if strategy.bypasses_primitive(units.len()) {
            let map = single_cluster(units);
            events::partition_built(map.strategy(), map.len(), units.len(), true);
            return Ok(map);
        }
        check_lengths(units)?;

        let (primitive, groups) = match *strategy {
            ClusteringStrategy::Partitional { k } => {
                let clusterer = self.partitional.as_deref().ok_or_else(|| {
                    PartitionError::MissingPrimitive {
                        strategy: strategy.label().to_string(),
                    }
                })?;
                let k = if k > units.len() {
                    debug!(requested = k, population = units.len(), "clamping cluster count to population");
                    units.len()
                } else {
                    k
                };
                let raw = clusterer
                    .cluster(k, units)
                    .map_err(|reason| PartitionError::PrimitiveFailed {
                        primitive: clusterer.name().to_string(),
                        reason,
                    })?;
                let groups = assemble_partitional(clusterer.name(), units.len(), raw)?;
                (clusterer.name().to_string(), groups)
            }
            ClusteringStrategy::DensityBased { eps, min_pts } => {
                let clusterer = self.density.as_deref().ok_or_else(|| {
                    PartitionError::MissingPrimitive {
                        strategy: strategy.label().to_string(),
                    }
                })?;
                let raw = clusterer
                    .cluster(eps, min_pts, units)
                    .map_err(|reason| PartitionError::PrimitiveFailed {
                        primitive: clusterer.name().to_string(),
                        reason,
                    })?;
                let groups = assemble_density(clusterer.name(), units.len(), raw)?;
                (clusterer.name().to_string(), groups)
            }
        };

        let clusters = groups
            .into_iter()
            .map(|idx| idx.into_iter().map(|i| units[i].clone()).collect())
            .collect();
        let map = ClusterMap::from_clusters(clusters, primitive, false);

        for (id, members) in map.iter() {
            debug!(cluster = id, size = members.len(), "cluster assembled");
        }
        events::partition_built(map.strategy(), map.len(), units.len(), false);
        Ok(map)
    }

    /// [`partition`](Self::partition), falling back to one sorted cluster when
    /// the primitive fails.
    pub fn partition_or_single(
        &self,
        units: &[ClusterableUnit],
        strategy: &ClusteringStrategy,
    ) -> ClusterMap {
        match self.partition(units, strategy) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "partition failed, falling back to a single sorted cluster");
                single_cluster(units)
            }
        }
    }
}

fn single_cluster(units: &[ClusterableUnit]) -> ClusterMap {
    ClusterMap::from_clusters(vec![units.to_vec()], SINGLE_CLUSTER, true)
}

fn check_lengths(units: &[ClusterableUnit]) -> Result<(), PartitionError> {
    let Some(first) = units.first() else {
        return Ok(());
    };
    let expected = first.features().len();
    match units.iter().find(|u| u.features().len() != expected) {
        Some(u) => Err(PartitionError::RaggedFeatures {
            object_id: u.object().id.to_string(),
            expected,
            found: u.features().len(),
        }),
        None => Ok(()),
    }
}

/// Mark `idx` as seen, rejecting out-of-range and repeated indices.
fn claim(primitive: &str, seen: &mut [bool], idx: usize) -> Result<(), PartitionError> {
    let n = seen.len();
    match seen.get(idx) {
        None => Err(PartitionError::InconsistentShape {
            primitive: primitive.to_string(),
            reason: format!("index {idx} out of range for {n} units"),
        }),
        Some(true) => Err(PartitionError::InconsistentShape {
            primitive: primitive.to_string(),
            reason: format!("index {idx} assigned to more than one cluster"),
        }),
        Some(false) => {
            seen[idx] = true;
            Ok(())
        }
    }
}

/// Map-shaped output: every index exactly once, clusters in key order.
fn assemble_partitional(
    primitive: &str,
    n: usize,
    raw: BTreeMap<usize, Vec<usize>>,
) -> Result<Vec<Vec<usize>>, PartitionError> {
    let mut seen = vec![false; n];
    for &idx in raw.values().flatten() {
        claim(primitive, &mut seen, idx)?;
    }
    if let Some(missing) = seen.iter().position(|s| !s) {
        return Err(PartitionError::InconsistentShape {
            primitive: primitive.to_string(),
            reason: format!("index {missing} not assigned to any cluster"),
        });
    }
    Ok(raw.into_values().collect())
}

/// List-shaped output: unassigned indices are noise and go to one trailing cluster.
fn assemble_density(
    primitive: &str,
    n: usize,
    mut raw: Vec<Vec<usize>>,
) -> Result<Vec<Vec<usize>>, PartitionError> {
    let mut seen = vec![false; n];
    for &idx in raw.iter().flatten() {
        claim(primitive, &mut seen, idx)?;
    }
    let noise: Vec<usize> = (0..n).filter(|&i| !seen[i]).collect();
    if !noise.is_empty() {
        debug!(noise = noise.len(), "collecting noise points into a trailing cluster");
        raw.push(noise);
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitional_rejects_unassigned_index() {
        let raw = BTreeMap::from([(0, vec![0, 2])]);
        let err = assemble_partitional("km", 3, raw).unwrap_err();
        assert!(matches!(err, PartitionError::InconsistentShape { .. }));
    }

    #[test]
    fn partitional_rejects_duplicate_index() {
        let raw = BTreeMap::from([(0, vec![0, 1]), (1, vec![1, 2])]);
        assert!(assemble_partitional("km", 3, raw).is_err());
    }

    #[test]
    fn out_of_range_index_is_inconsistent() {
        assert!(assemble_density("db", 2, vec![vec![0, 5]]).is_err());
    }

    #[test]
    fn density_noise_goes_to_trailing_cluster() {
        let groups = assemble_density("db", 5, vec![vec![3, 1], vec![4]]).unwrap();
        assert_eq!(groups, vec![vec![3, 1], vec![4], vec![0, 2]]);
    }

    #[test]
    fn density_without_noise_adds_nothing() {
        let groups = assemble_density("db", 2, vec![vec![0], vec![1]]).unwrap();
        assert_eq!(groups.len(), 2);
    }
}
