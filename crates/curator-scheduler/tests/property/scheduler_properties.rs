//! Property tests: every object is served exactly once before exhaustion,
//! and exhaustion always repeats the last object. Holds for round-robin
//! and random serving alike.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use curator_clustering::{ClusteringStrategy, Partitioner};
use curator_core::{ClusterableUnit, FeatureVector};
use curator_scheduler::{RandomScheduler, RoundRobinScheduler, SampleProposal, ServeOutcome};
use test_fixtures::{object, CountingClusterer};

proptest! {
    #[test]
    fn prop_each_object_served_once_then_exhausted(
        confidences in prop::collection::vec(0.0f64..=1.0, 1..60),
        k in 1usize..10,
    ) {
        let units: Vec<ClusterableUnit> = confidences
            .iter()
            .enumerate()
            .map(|(i, c)| {
                ClusterableUnit::new(
                    Arc::new(object(&format!("o{i}"), "Tumor", *c)),
                    FeatureVector::new(vec![i as f64]),
                )
            })
            .collect();
        let map = Partitioner::new()
            .with_partitional(Box::new(CountingClusterer::new()))
            .partition(&units, &ClusteringStrategy::Partitional { k })
            .unwrap();
        let mut s = RoundRobinScheduler::new(k);
        s.build(Arc::new(map));

        let mut seen = HashSet::new();
        let mut last = String::new();
        for _ in 0..units.len() {
            match s.serve_next() {
                ServeOutcome::Next(served) => {
                    prop_assert!(seen.insert(served.object.id.to_string()));
                    last = served.object.id.to_string();
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
        prop_assert_eq!(seen.len(), units.len());
        match s.serve_next() {
            ServeOutcome::Exhausted(served) => prop_assert_eq!(served.object.id.to_string(), last),
            other => prop_assert!(false, "expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn prop_random_never_repeats_before_exhaustion(
        n in 1usize..50,
        seed in any::<u64>(),
    ) {
        let units: Vec<ClusterableUnit> = (0..n)
            .map(|i| {
                ClusterableUnit::new(
                    Arc::new(object(&format!("o{i}"), "Tumor", 0.5)),
                    FeatureVector::new(vec![i as f64]),
                )
            })
            .collect();
        let map = Partitioner::new()
            .partition(&units, &ClusteringStrategy::Partitional { k: 1 })
            .unwrap();
        let mut s = RandomScheduler::seeded(1, seed);
        s.build(Arc::new(map));

        let mut seen = HashSet::new();
        for _ in 0..n {
            let outcome = s.serve_next();
            prop_assert!(outcome.is_fresh());
            prop_assert!(seen.insert(outcome.object().unwrap().id.to_string()));
        }
        prop_assert!(matches!(s.serve_next(), ServeOutcome::Exhausted(_)));
    }
}
