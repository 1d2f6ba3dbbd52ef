//! TrainingSetIntegrator against the in-memory annotation store.

use std::sync::Arc;

use curator_core::config::{DuplicateCriterion, PopulationConfig, TrainingConfig};
use curator_core::errors::{CuratorErrorCode, StoreError, TrainingError};
use curator_core::{AnnotationId, ClassLabel, TrainingAnnotation, TrainingMember};
use curator_training::TrainingSetIntegrator;
use test_fixtures::{object_at, InMemoryAnnotationStore, RecordingListener};

fn integrator(store: &Arc<InMemoryAnnotationStore>) -> TrainingSetIntegrator {
    TrainingSetIntegrator::new(
        store.clone(),
        &TrainingConfig::default(),
        &PopulationConfig::default(),
    )
}

fn label(s: &str) -> ClassLabel {
    ClassLabel::new(s)
}

#[test]
fn first_commit_creates_annotation() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    let outcome = integrator(&store).commit(&p, Some(&label("Tumor"))).unwrap();
    assert!(outcome.created);
    assert!(outcome.inserted);
    assert_eq!(outcome.removed_from, 0);

    let tumor = store.by_class("Tumor").unwrap();
    assert_eq!(tumor.name, "Active Learning");
    assert_eq!(tumor.len(), 1);
    assert_eq!(tumor.id, outcome.annotation_id);
}

#[test]
fn repeated_commit_is_idempotent() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    let second = integrator.commit(&p, Some(&label("Tumor"))).unwrap();

    assert!(!second.inserted);
    assert!(!second.created);
    assert_eq!(store.member_count(), 1);
    assert_eq!(store.all().len(), 1);
}

#[test]
fn reclassification_moves_membership() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    let moved = integrator.commit(&p, Some(&label("Stroma"))).unwrap();

    assert_eq!(moved.removed_from, 1);
    assert!(moved.inserted);
    assert_eq!(store.member_count(), 1);
    let tumor = store.by_class("Tumor").unwrap();
    assert!(tumor.is_empty(), "emptied annotation is kept, not deleted");
    assert_eq!(store.by_class("Stroma").unwrap().len(), 1);
}

#[test]
fn previous_session_annotation_is_reused() {
    let mut old = TrainingAnnotation::new(AnnotationId::new("prev"), "Active Learning", label("Tumor"));
    old.insert(TrainingMember::of(&object_at("q", "Tumor", 0.5, 9.0, 9.0)));
    let store = Arc::new(InMemoryAnnotationStore::with_annotations(vec![old]));

    let outcome = integrator(&store)
        .commit(&object_at("p", "Tumor", 0.3, 1.0, 2.0), Some(&label("Tumor")))
        .unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.annotation_id, AnnotationId::new("prev"));
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.by_class("Tumor").unwrap().len(), 2);
}

#[test]
fn centroid_duplicate_from_earlier_session_is_removed() {
    // Same physical location, different id (object ids are not stable across sessions).
    let mut old = TrainingAnnotation::new(AnnotationId::new("prev"), "Active Learning", label("Stroma"));
    old.insert(TrainingMember::of(&object_at("stale-id", "Stroma", 0.5, 4.0, 4.0)));
    let store = Arc::new(InMemoryAnnotationStore::with_annotations(vec![old]));

    let outcome = integrator(&store)
        .commit(&object_at("p", "Tumor", 0.3, 4.0, 4.0), Some(&label("Tumor")))
        .unwrap();
    assert_eq!(outcome.removed_from, 1);
    assert!(store.by_class("Stroma").unwrap().is_empty());
}

#[test]
fn object_key_criterion_uses_ids() {
    let mut old = TrainingAnnotation::new(AnnotationId::new("prev"), "Active Learning", label("Stroma"));
    old.insert(TrainingMember::of(&object_at("other", "Stroma", 0.5, 4.0, 4.0)));
    let store = Arc::new(InMemoryAnnotationStore::with_annotations(vec![old]));
    let config = TrainingConfig {
        duplicate_criterion: DuplicateCriterion::ObjectKey,
        ..Default::default()
    };
    let integrator =
        TrainingSetIntegrator::new(store.clone(), &config, &PopulationConfig::default());

    let outcome = integrator
        .commit(&object_at("p", "Tumor", 0.3, 4.0, 4.0), Some(&label("Tumor")))
        .unwrap();
    assert_eq!(outcome.removed_from, 0);
    assert_eq!(store.by_class("Stroma").unwrap().len(), 1);
}

#[test]
fn missing_or_background_class_is_rejected() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    let err = integrator.commit(&p, None).unwrap_err();
    assert!(matches!(err, TrainingError::InvalidLabel { .. }));
    assert_eq!(err.error_code(), "INVALID_LABEL");

    let err = integrator.commit(&p, Some(&label("Image"))).unwrap_err();
    assert!(matches!(err, TrainingError::InvalidLabel { .. }));
    assert!(store.all().is_empty());
    assert_eq!(store.update_count(), 0);
}

#[test]
fn annotations_with_other_names_are_untouched() {
    let mut foreign = TrainingAnnotation::new(AnnotationId::new("f"), "Manual", label("Stroma"));
    foreign.insert(TrainingMember::of(&object_at("p", "Stroma", 0.5, 1.0, 2.0)));
    let store = Arc::new(InMemoryAnnotationStore::with_annotations(vec![foreign]));

    integrator(&store)
        .commit(&object_at("p", "Tumor", 0.3, 1.0, 2.0), Some(&label("Tumor")))
        .unwrap();
    let manual = store.all().into_iter().find(|a| a.name == "Manual").unwrap();
    assert_eq!(manual.len(), 1);
}

#[test]
fn notification_names_touched_annotations_and_skips_origin() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let own = RecordingListener::new();
    let view = RecordingListener::new();
    let own_id = store.register(own.clone());
    store.register(view.clone());

    let integrator = integrator(&store).with_origin(own_id);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);
    let first = integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    let second = integrator.commit(&p, Some(&label("Stroma"))).unwrap();

    assert!(own.events().is_empty());
    let events = view.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].annotation_ids, vec![first.annotation_id.clone()]);
    assert_eq!(events[1].annotation_ids.len(), 2);
    assert!(events[1].annotation_ids.contains(&first.annotation_id));
    assert!(events[1].annotation_ids.contains(&second.annotation_id));
}

#[test]
fn idempotent_commit_sends_no_notification() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let view = RecordingListener::new();
    store.register(view.clone());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    assert_eq!(view.events().len(), 1);
}

#[test]
fn failed_create_keeps_previous_membership() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let view = RecordingListener::new();
    store.register(view.clone());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    store.set_fail_creates(true);
    let err = integrator.commit(&p, Some(&label("Stroma"))).unwrap_err();

    assert!(matches!(err, TrainingError::Store(StoreError::Unavailable { .. })));
    assert_eq!(store.member_count(), 1);
    assert_eq!(store.by_class("Tumor").unwrap().len(), 1);
    assert_eq!(view.events().len(), 1, "nothing was written, nothing announced");
}

#[test]
fn failed_removal_still_announces_the_insert() {
    let store = Arc::new(InMemoryAnnotationStore::new());
    let view = RecordingListener::new();
    store.register(view.clone());
    let integrator = integrator(&store);
    let p = object_at("p", "Tumor", 0.3, 1.0, 2.0);

    integrator.commit(&p, Some(&label("Tumor"))).unwrap();
    store.set_fail_updates_of(Some("Tumor"));
    assert!(integrator.commit(&p, Some(&label("Stroma"))).is_err());

    // The object sits in both for now, never in neither.
    let stroma = store.by_class("Stroma").unwrap();
    assert_eq!(stroma.len(), 1);
    assert_eq!(store.by_class("Tumor").unwrap().len(), 1);
    let events = view.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].annotation_ids, vec![stroma.id.clone()]);

    // Retrying once the store recovers completes the move.
    store.set_fail_updates_of(None);
    let retry = integrator.commit(&p, Some(&label("Stroma"))).unwrap();
    assert!(!retry.inserted);
    assert_eq!(retry.removed_from, 1);
    assert_eq!(store.member_count(), 1);
}
