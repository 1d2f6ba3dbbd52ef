use crate::annotation::{AnnotationId, TrainingAnnotation};
use crate::errors::StoreError;
use crate::events::{AnnotationsChanged, ListenerId};
use crate::object::ClassLabel;

/// External store of training annotations.
pub trait AnnotationStore: Send + Sync {
    /// Every annotation named `name`, in any class. Includes annotations
    /// left behind by previous sessions.
    fn training_annotations(&self, name: &str) -> Result<Vec<TrainingAnnotation>, StoreError>;

    /// Create a new, empty annotation and return it.
    fn create_training_annotation(
        &self,
        name: &str,
        class: &ClassLabel,
    ) -> Result<TrainingAnnotation, StoreError>;

    /// Replace the stored content of `annotation` (members and region).
    fn update_training_annotation(&self, annotation: &TrainingAnnotation)
        -> Result<(), StoreError>;

    /// Delete an annotation. Never called implicitly by the integrator.
    fn remove_annotation(&self, id: &AnnotationId) -> Result<(), StoreError>;

    /// Tell dependent views that the listed annotations changed.
    /// The listener registered as `suppress` must not be called.
    fn notify_changed(&self, event: &AnnotationsChanged, suppress: Option<ListenerId>);
}
