//! Density clustering backed by the `hdbscan` crate.
//!
//! HDBSCAN has no fixed neighbourhood radius, so `eps` is not used here;
//! configuration validation rejects an explicit `eps` with this primitive.
//! Use [`DbscanClusterer`](crate::DbscanClusterer) when the radius matters.
//! `min_pts` sets both the minimum cluster size and the core-distance
//! sample count.

use std::collections::BTreeMap;

use curator_core::traits::DensityClusterer;
use curator_core::ClusterableUnit;
use hdbscan::{Hdbscan, HdbscanHyperParams};
use tracing::debug;

/// Smallest cluster HDBSCAN will form.
const MIN_CLUSTER_SIZE: usize = 2;

/// [`DensityClusterer`] running HDBSCAN over unit feature points.
#[derive(Debug, Clone, Copy, Default)]
pub struct HdbscanClusterer;

impl HdbscanClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl DensityClusterer for HdbscanClusterer {
    fn cluster(
        &self,
        eps: f64,
        min_pts: usize,
        units: &[ClusterableUnit],
    ) -> Result<Vec<Vec<usize>>, String> {
        let min_cluster_size = min_pts.max(MIN_CLUSTER_SIZE);
        if units.len() < min_cluster_size {
            // Too few points to form any cluster: everything is noise.
            return Ok(Vec::new());
        }
        if units.first().map_or(true, |u| u.features().is_empty()) {
            return Err("cannot cluster objects without features".to_string());
        }
        debug!(eps, min_pts, population = units.len(), "running hdbscan");

        let features: Vec<Vec<f32>> = units
            .iter()
            .map(|u| u.point().iter().map(|&v| v as f32).collect())
            .collect();

        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(min_cluster_size)
            .min_samples(min_pts.clamp(1, units.len()))
            .build();

        let labels = Hdbscan::new(&features, hyper_params)
            .cluster()
            .map_err(|e| format!("{e:?}"))?;

        let mut grouped: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (idx, &label) in labels.iter().enumerate() {
            // Negative labels are noise; the partitioner collects those.
            if label >= 0 {
                grouped.entry(label).or_default().push(idx);
            }
        }
        Ok(grouped.into_values().collect())
    }

    fn name(&self) -> &str {
        "hdbscan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{Confidence, DomainObject, FeatureVector, Point2};
    use std::sync::Arc;

    fn unit(id: usize, point: Vec<f64>) -> ClusterableUnit {
        let object = DomainObject::new(
            format!("o{id}"),
            Some("Tumor".into()),
            Confidence::new(0.5),
            Point2::new(0.0, 0.0),
        );
        ClusterableUnit::new(Arc::new(object), FeatureVector::new(point))
    }

    #[test]
    fn too_few_points_is_all_noise() {
        let units = vec![unit(0, vec![1.0])];
        assert!(HdbscanClusterer.cluster(0.5, 4, &units).unwrap().is_empty());
    }

    #[test]
    fn assigned_indices_are_unique_and_in_range() {
        let mut units = Vec::new();
        for i in 0..6 {
            units.push(unit(i, vec![0.0 + i as f64 * 0.01, 0.0]));
        }
        for i in 6..12 {
            units.push(unit(i, vec![50.0 + i as f64 * 0.01, 50.0]));
        }
        let clusters = HdbscanClusterer.cluster(0.5, 2, &units).unwrap();
        let mut all: Vec<usize> = clusters.into_iter().flatten().collect();
        let before = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), before);
        assert!(all.iter().all(|&i| i < units.len()));
    }
}
