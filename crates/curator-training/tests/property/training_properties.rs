//! Property test: any sequence of commits leaves each committed object in
//! exactly one annotation, the one for its most recent class.

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;

use curator_core::config::{PopulationConfig, TrainingConfig};
use curator_core::ClassLabel;
use curator_training::TrainingSetIntegrator;
use test_fixtures::{object_at, InMemoryAnnotationStore};

const CLASSES: [&str; 3] = ["Tumor", "Stroma", "Immune cells"];

proptest! {
    #[test]
    fn prop_each_object_counted_once_under_latest_class(
        commits in prop::collection::vec((0usize..6, 0usize..3), 1..40),
    ) {
        let store = Arc::new(InMemoryAnnotationStore::new());
        let integrator = TrainingSetIntegrator::new(
            store.clone(),
            &TrainingConfig::default(),
            &PopulationConfig::default(),
        );

        let mut latest: HashMap<usize, usize> = HashMap::new();
        for (obj, class) in &commits {
            let o = object_at(&format!("o{obj}"), CLASSES[*class], 0.5, *obj as f64, 0.0);
            integrator.commit(&o, Some(&ClassLabel::new(CLASSES[*class]))).unwrap();
            latest.insert(*obj, *class);
        }

        prop_assert_eq!(store.member_count(), latest.len());
        for (obj, class) in latest {
            let annotation = store.by_class(CLASSES[class]).unwrap();
            let key = format!("o{obj}");
            prop_assert!(annotation.contains_object(&key.as_str().into()));
        }
    }
}
