//! Domain object and confidence ordering tests.

use std::cmp::Ordering;

use proptest::prelude::*;

use curator_core::{Confidence, DomainObject, ObjectKind};

fn confidence() -> impl Strategy<Value = Confidence> {
    prop_oneof![
        1 => Just(Confidence::UNDEFINED),
        4 => (-0.5f64..1.5).prop_map(Confidence::new),
    ]
}

proptest! {
    #[test]
    fn prop_review_order_is_antisymmetric(a in confidence(), b in confidence()) {
        prop_assert_eq!(a.review_order(b), b.review_order(a).reverse());
    }

    #[test]
    fn prop_review_order_is_transitive(a in confidence(), b in confidence(), c in confidence()) {
        if a.review_order(b) != Ordering::Greater && b.review_order(c) != Ordering::Greater {
            prop_assert!(a.review_order(c) != Ordering::Greater);
        }
    }

    #[test]
    fn prop_undefined_sorts_first(v in 0.0f64..=1.0) {
        prop_assert_eq!(Confidence::UNDEFINED.review_order(Confidence::new(v)), Ordering::Less);
    }

    #[test]
    fn prop_finite_values_are_clamped(v in -10.0f64..10.0) {
        let c = Confidence::new(v).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn object_without_confidence_deserializes_as_undefined() {
    let json = r#"{
        "id": "cell-17",
        "kind": "cell",
        "class": "Tumor",
        "centroid": { "x": 3.5, "y": 8.0 }
    }"#;
    let object: DomainObject = serde_json::from_str(json).unwrap();
    assert_eq!(object.kind, ObjectKind::Cell);
    assert!(object.confidence.is_undefined());
    assert_eq!(object.class.unwrap().as_str(), "Tumor");
}

#[test]
fn unclassified_object_has_no_class() {
    let json = r#"{
        "id": "d1",
        "kind": "detection",
        "class": null,
        "confidence": 0.4,
        "centroid": { "x": 0.0, "y": 0.0 }
    }"#;
    let object: DomainObject = serde_json::from_str(json).unwrap();
    assert!(object.class.is_none());
    assert_eq!(object.confidence, Confidence::new(0.4));
}
