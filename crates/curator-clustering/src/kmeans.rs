//! Built-in partitional primitive: k-means with k-means++ seeding.
//!
//! Centroids are seeded by D² sampling, then refined with Lloyd
//! iterations until no assignment changes or the iteration cap is hit.
//! A cluster that loses all its points stays empty; the partitioner drops
//! empty clusters when it builds the map.

use std::collections::BTreeMap;

use curator_core::config::PartitionConfig;
use curator_core::traits::PartitionalClusterer;
use curator_core::ClusterableUnit;
use rand::prelude::*;
use tracing::debug;

/// [`PartitionalClusterer`] running k-means++ over unit feature points.
#[derive(Debug, Clone)]
pub struct KMeansClusterer {
    max_iterations: usize,
    /// `None` draws a fresh seed from entropy on every call.
    seed: Option<u64>,
}

impl Default for KMeansClusterer {
    fn default() -> Self {
        Self::new(curator_core::config::defaults::DEFAULT_MAX_ITERATIONS)
    }
}

impl KMeansClusterer {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            seed: None,
        }
    }

    pub fn from_config(config: &PartitionConfig) -> Self {
        let clusterer = Self::new(config.max_iterations);
        match config.seed {
            Some(seed) => clusterer.with_seed(seed),
            None => clusterer,
        }
    }

    /// Fix the initialisation seed so repeated calls give the same clusters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl PartitionalClusterer for KMeansClusterer {
    fn cluster(
        &self,
        count: usize,
        units: &[ClusterableUnit],
    ) -> Result<BTreeMap<usize, Vec<usize>>, String> {
        if count == 0 {
            return Err("cluster count must be positive".to_string());
        }
        if count > units.len() {
            return Err(format!(
                "cluster count ({count}) exceeds population ({})",
                units.len()
            ));
        }
        let points: Vec<&[f64]> = units.iter().map(|u| u.point()).collect();
        if points.iter().flat_map(|p| p.iter()).any(|v| !v.is_finite()) {
            return Err("features contain non-finite values".to_string());
        }

        let mut rng = self.rng();
        let mut centroids = plus_plus_init(&points, count, &mut rng);
        let mut assignments = vec![usize::MAX; points.len()];
        let mut iterations = 0;

        for _ in 0..self.max_iterations {
            iterations += 1;
            let mut changed = false;
            for (i, point) in points.iter().enumerate() {
                let best = nearest(point, &centroids);
                if assignments[i] != best {
                    assignments[i] = best;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            centroids = recompute_centroids(&points, &assignments, &centroids);
        }
        debug!(k = count, population = points.len(), iterations, "k-means finished");

        let mut clusters: BTreeMap<usize, Vec<usize>> =
            (0..count).map(|c| (c, Vec::new())).collect();
        for (idx, cluster) in assignments.into_iter().enumerate() {
            clusters.entry(cluster).or_default().push(idx);
        }
        Ok(clusters)
    }

    fn name(&self) -> &str {
        "kmeans"
    }
}

fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, centroid) in centroids.iter().enumerate() {
        let dist = distance_squared(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = j;
        }
    }
    best
}

/// k-means++: first centroid uniform, each next one drawn with probability
/// proportional to its squared distance from the nearest chosen centroid.
fn plus_plus_init(points: &[&[f64]], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut chosen = vec![false; n];
    let first = rng.gen_range(0..n);
    chosen[first] = true;
    let mut centroids = vec![points[first].to_vec()];
    let mut min_distances: Vec<f64> = points
        .iter()
        .map(|p| distance_squared(p, points[first]))
        .collect();

    while centroids.len() < k {
        let total: f64 = min_distances.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut pick = None;
            for (i, &d) in min_distances.iter().enumerate() {
                if d <= 0.0 {
                    continue;
                }
                pick = Some(i);
                if target < d {
                    break;
                }
                target -= d;
            }
            pick
        } else {
            None
        };
        // All remaining points coincide with a centroid: take the next unused one.
        let Some(next) = next.or_else(|| chosen.iter().position(|c| !c)) else {
            break;
        };
        chosen[next] = true;
        centroids.push(points[next].to_vec());
        for (i, point) in points.iter().enumerate() {
            let dist = distance_squared(point, points[next]);
            if dist < min_distances[i] {
                min_distances[i] = dist;
            }
        }
    }
    centroids
}

/// Mean of each cluster's points; an emptied cluster keeps its old centroid.
fn recompute_centroids(
    points: &[&[f64]],
    assignments: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let dims = previous.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0; dims]; previous.len()];
    let mut counts = vec![0usize; previous.len()];
    for (point, &cluster) in points.iter().zip(assignments) {
        counts[cluster] += 1;
        for (sum, v) in sums[cluster].iter_mut().zip(point.iter()) {
            *sum += v;
        }
    }
    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((mut sum, count), old)| {
            if count == 0 {
                return old.clone();
            }
            for v in &mut sum {
                *v /= count as f64;
            }
            sum
        })
        .collect()
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

    fn two_blobs() -> Vec<ClusterableUnit> {
        (0..10)
            .map(|i| {
                let base = if i < 5 { 0.0 } else { 100.0 };
                unit(i, vec![base + (i % 5) as f64 * 0.1, base])
            })
            .collect()
    }

    #[test]
    fn separates_well_spaced_blobs() {
        let clusters = KMeansClusterer::default()
            .with_seed(7)
            .cluster(2, &two_blobs())
            .unwrap();
        let mut groups: Vec<Vec<usize>> = clusters.into_values().collect();
        groups.sort();
        assert_eq!(groups, vec![vec![0, 1, 2, 3, 4], vec![5, 6, 7, 8, 9]]);
    }

    #[test]
    fn same_seed_gives_same_assignment() {
        let km = KMeansClusterer::new(50).with_seed(42);
        let units: Vec<ClusterableUnit> =
            (0..20).map(|i| unit(i, vec![(i * 7 % 13) as f64, (i % 4) as f64])).collect();
        assert_eq!(km.cluster(3, &units).unwrap(), km.cluster(3, &units).unwrap());
    }

    #[test]
    fn every_index_assigned_exactly_once() {
        let units: Vec<ClusterableUnit> = (0..9).map(|i| unit(i, vec![i as f64])).collect();
        let clusters = KMeansClusterer::default().with_seed(1).cluster(4, &units).unwrap();
        let mut all: Vec<usize> = clusters.into_values().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn identical_points_still_get_k_centroids() {
        let units: Vec<ClusterableUnit> = (0..4).map(|i| unit(i, vec![1.0, 1.0])).collect();
        let clusters = KMeansClusterer::default().with_seed(3).cluster(3, &units).unwrap();
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters.values().map(Vec::len).sum::<usize>(), 4);
    }

    #[test]
    fn rejects_count_above_population_and_nan() {
        let units = vec![unit(0, vec![1.0]), unit(1, vec![f64::NAN])];
        let km = KMeansClusterer::default();
        assert!(km.cluster(3, &units).is_err());
        assert!(km.cluster(2, &units).unwrap_err().contains("non-finite"));
    }
}
