use super::types::AnnotationsChanged;

/// Receiver of annotation change notifications (e.g. a view that re-renders,
/// or a session that reclusters on hierarchy changes).
pub trait AnnotationListener: Send + Sync {
    fn on_annotations_changed(&self, event: &AnnotationsChanged);
}
