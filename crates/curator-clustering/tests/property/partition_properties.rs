//! Property tests for the partitioner: the map is a true partition of the
//! population and every cluster is in review order.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use curator_clustering::{ClusteringStrategy, Partitioner};
use curator_core::{ClusterableUnit, Confidence, FeatureVector};
use test_fixtures::{object, undefined, CountingClusterer};

fn population(confidences: &[Option<f64>]) -> Vec<ClusterableUnit> {
    confidences
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let id = format!("o{i}");
            let o = match c {
                Some(v) => object(&id, "Tumor", *v),
                None => undefined(&id, "Tumor"),
            };
            ClusterableUnit::new(Arc::new(o), FeatureVector::new(vec![i as f64]))
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_every_object_in_exactly_one_cluster(
        confidences in prop::collection::vec(prop::option::of(0.0f64..=1.0), 0..40),
        k in 0usize..8,
    ) {
        let units = population(&confidences);
        let partitioner = Partitioner::new().with_partitional(Box::new(CountingClusterer::new()));
        let map = partitioner.partition(&units, &ClusteringStrategy::Partitional { k }).unwrap();

        prop_assert_eq!(map.population(), units.len());
        let seen: BTreeSet<String> = map
            .iter()
            .flat_map(|(_, c)| c.iter().map(|u| u.object().id.to_string()))
            .collect();
        prop_assert_eq!(seen.len(), units.len());
        prop_assert!(map.iter().all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn prop_clusters_are_in_review_order(
        confidences in prop::collection::vec(prop::option::of(0.0f64..=1.0), 1..40),
        k in 1usize..6,
    ) {
        let units = population(&confidences);
        let partitioner = Partitioner::new().with_partitional(Box::new(CountingClusterer::new()));
        let map = partitioner.partition(&units, &ClusteringStrategy::Partitional { k }).unwrap();

        for (_, cluster) in map.iter() {
            let conf: Vec<Confidence> = cluster.iter().map(|u| u.object().confidence).collect();
            for pair in conf.windows(2) {
                prop_assert!(pair[0].review_order(pair[1]) != std::cmp::Ordering::Greater);
            }
        }
    }
}
