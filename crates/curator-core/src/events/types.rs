//! Event payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationId;

/// Handle of a registered listener, returned by [`EventDispatcher::register`](super::EventDispatcher::register).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Payload for `on_annotations_changed`: exactly the annotations a commit touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationsChanged {
    pub annotation_ids: Vec<AnnotationId>,
    pub changed_at: DateTime<Utc>,
}

impl AnnotationsChanged {
    pub fn new(annotation_ids: Vec<AnnotationId>) -> Self {
        Self {
            annotation_ids,
            changed_at: Utc::now(),
        }
    }
}
