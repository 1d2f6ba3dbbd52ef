//! Recognising a reviewed object inside an annotation.

use curator_core::config::DuplicateCriterion;
use curator_core::{DomainObject, TrainingAnnotation};

/// Index of the member of `annotation` that stands for `object`.
///
/// Centroid matching is exact. The same physical object keeps its centroid
/// across sessions even when its id does not.
pub fn find_member(
    annotation: &TrainingAnnotation,
    object: &DomainObject,
    criterion: DuplicateCriterion,
) -> Option<usize> {
    match criterion {
        DuplicateCriterion::Centroid => annotation.position_at(object.centroid),
        DuplicateCriterion::ObjectKey => annotation.position_of(&object.id),
    }
}

/// Remove every member of `annotation` matching `object`. Returns how many
/// were removed. An annotation emptied this way is left in place.
pub fn remove_matches(
    annotation: &mut TrainingAnnotation,
    object: &DomainObject,
    criterion: DuplicateCriterion,
) -> usize {
    let mut removed = 0;
    while let Some(idx) = find_member(annotation, object, criterion) {
        annotation.remove_at(idx);
        removed += 1;
    }
    removed
}
