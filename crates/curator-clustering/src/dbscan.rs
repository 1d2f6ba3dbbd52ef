//! Built-in density primitive: classic fixed-radius DBSCAN.
//!
//! A point is a core point when at least `min_pts` other points lie within
//! `eps` of it. Clusters grow from core points through their neighbours;
//! points reachable from no core point are noise and are left out of the
//! result for the partitioner to collect.

use std::collections::VecDeque;

use curator_core::traits::DensityClusterer;
use curator_core::ClusterableUnit;
use tracing::debug;

const NOISE: usize = usize::MAX;

/// [`DensityClusterer`] running DBSCAN with Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbscanClusterer;

impl DbscanClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl DensityClusterer for DbscanClusterer {
    fn cluster(
        &self,
        eps: f64,
        min_pts: usize,
        units: &[ClusterableUnit],
    ) -> Result<Vec<Vec<usize>>, String> {
        if !(eps.is_finite() && eps > 0.0) {
            return Err(format!("eps must be a positive finite number, got {eps}"));
        }
        let points: Vec<&[f64]> = units.iter().map(|u| u.point()).collect();
        if points.iter().flat_map(|p| p.iter()).any(|v| !v.is_finite()) {
            return Err("features contain non-finite values".to_string());
        }
        debug!(eps, min_pts, population = points.len(), "running dbscan");

        let eps_squared = eps * eps;
        let neighbours = |i: usize| -> Vec<usize> {
            (0..points.len())
                .filter(|&j| j != i && distance_squared(points[i], points[j]) <= eps_squared)
                .collect()
        };

        let mut labels: Vec<Option<usize>> = vec![None; points.len()];
        let mut clusters: Vec<Vec<usize>> = Vec::new();

        for start in 0..points.len() {
            if labels[start].is_some() {
                continue;
            }
            let seeds = neighbours(start);
            if seeds.len() < min_pts {
                labels[start] = Some(NOISE);
                continue;
            }

            let cluster_id = clusters.len();
            let mut members = vec![start];
            labels[start] = Some(cluster_id);
            let mut queue: VecDeque<usize> = seeds.into();

            while let Some(q) = queue.pop_front() {
                match labels[q] {
                    // Border point previously marked noise joins, but does not expand.
                    Some(NOISE) => {
                        labels[q] = Some(cluster_id);
                        members.push(q);
                    }
                    Some(_) => {}
                    None => {
                        labels[q] = Some(cluster_id);
                        members.push(q);
                        let reach = neighbours(q);
                        if reach.len() >= min_pts {
                            queue.extend(reach.into_iter().filter(|&r| {
                                matches!(labels[r], None | Some(NOISE))
                            }));
                        }
                    }
                }
            }
            clusters.push(members);
        }

        debug!(clusters = clusters.len(), "dbscan finished");
        Ok(clusters)
    }

    fn name(&self) -> &str {
        "dbscan"
    }
}

fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{Confidence, DomainObject, FeatureVector, Point2};
    use std::sync::Arc;

    fn line(xs: &[f64]) -> Vec<ClusterableUnit> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| {
                let object = DomainObject::new(
                    format!("o{i}"),
                    Some("Tumor".into()),
                    Confidence::new(0.5),
                    Point2::new(0.0, 0.0),
                );
                ClusterableUnit::new(Arc::new(object), FeatureVector::new(vec![x]))
            })
            .collect()
    }

    #[test]
    fn eps_controls_how_far_clusters_reach() {
        let units = line(&[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);

        let tight = DbscanClusterer.cluster(1.5, 1, &units).unwrap();
        assert_eq!(tight, vec![vec![0, 1, 2], vec![3, 4, 5]]);

        let wide = DbscanClusterer.cluster(9.0, 1, &units).unwrap();
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].len(), 6);
    }

    #[test]
    fn isolated_points_are_noise() {
        let units = line(&[0.0, 0.5, 1.0, 50.0]);
        let clusters = DbscanClusterer.cluster(0.6, 2, &units).unwrap();
        assert_eq!(clusters.len(), 1);
        assert!(!clusters[0].contains(&3));
    }

    #[test]
    fn border_point_joins_without_expanding() {
        // -1.0 and 2.0 have one neighbour each: border points, not cores.
        let units = line(&[-1.0, 0.0, 1.0, 2.0]);
        let clusters = DbscanClusterer.cluster(1.0, 2, &units).unwrap();
        assert_eq!(clusters.len(), 1);
        let mut members = clusters[0].clone();
        members.sort_unstable();
        assert_eq!(members, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_bad_eps_and_nan() {
        let units = line(&[0.0, f64::NAN]);
        assert!(DbscanClusterer.cluster(0.0, 1, &units).is_err());
        assert!(DbscanClusterer.cluster(1.0, 1, &units).is_err());
    }
}
