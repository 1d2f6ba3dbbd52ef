//! In-memory annotation store with change notification.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use curator_core::annotation::{AnnotationId, TrainingAnnotation};
use curator_core::errors::StoreError;
use curator_core::events::{AnnotationListener, AnnotationsChanged, EventDispatcher, ListenerId};
use curator_core::traits::AnnotationStore;
use curator_core::ClassLabel;

/// Annotation store backed by a `Vec`, emitting through an [`EventDispatcher`].
///
/// Writes can be made to fail with [`StoreError::Unavailable`] to exercise
/// partial commits.
#[derive(Default)]
pub struct InMemoryAnnotationStore {
    annotations: Mutex<Vec<TrainingAnnotation>>,
    dispatcher: Mutex<EventDispatcher>,
    updates: AtomicUsize,
    fail_creates: AtomicBool,
    fail_updates_of: Mutex<Option<String>>,
}

impl InMemoryAnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with annotations, e.g. from a previous session.
    pub fn with_annotations(annotations: Vec<TrainingAnnotation>) -> Self {
        Self {
            annotations: Mutex::new(annotations),
            ..Default::default()
        }
    }

    pub fn register(&self, listener: Arc<dyn AnnotationListener>) -> ListenerId {
        self.dispatcher.lock().unwrap().register(listener)
    }

    pub fn all(&self) -> Vec<TrainingAnnotation> {
        self.annotations.lock().unwrap().clone()
    }

    /// Annotation of `class`, if one exists.
    pub fn by_class(&self, class: &str) -> Option<TrainingAnnotation> {
        self.all().into_iter().find(|a| a.class.as_str() == class)
    }

    /// Total members across every annotation.
    pub fn member_count(&self) -> usize {
        self.all().iter().map(TrainingAnnotation::len).sum()
    }

    /// Make every `create_training_annotation` fail until reset.
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    /// Make updates of annotations of `class` fail; `None` resets.
    pub fn set_fail_updates_of(&self, class: Option<&str>) {
        *self.fail_updates_of.lock().unwrap() = class.map(str::to_string);
    }

    /// Number of successful `update_training_annotation` calls so far.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl AnnotationStore for InMemoryAnnotationStore {
    fn training_annotations(&self, name: &str) -> Result<Vec<TrainingAnnotation>, StoreError> {
        Ok(self
            .annotations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.name == name)
            .cloned()
            .collect())
    }

    fn create_training_annotation(
        &self,
        name: &str,
        class: &ClassLabel,
    ) -> Result<TrainingAnnotation, StoreError> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "create disabled".to_string(),
            });
        }
        let id = AnnotationId::new(uuid::Uuid::new_v4().to_string());
        let annotation = TrainingAnnotation::new(id, name, class.clone());
        self.annotations.lock().unwrap().push(annotation.clone());
        Ok(annotation)
    }

    fn update_training_annotation(
        &self,
        annotation: &TrainingAnnotation,
    ) -> Result<(), StoreError> {
        if self.fail_updates_of.lock().unwrap().as_deref() == Some(annotation.class.as_str()) {
            return Err(StoreError::Unavailable {
                reason: format!("updates of {} disabled", annotation.class),
            });
        }
        let mut annotations = self.annotations.lock().unwrap();
        let slot = annotations
            .iter_mut()
            .find(|a| a.id == annotation.id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "annotation".to_string(),
                id: annotation.id.to_string(),
            })?;
        *slot = annotation.clone();
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove_annotation(&self, id: &AnnotationId) -> Result<(), StoreError> {
        let mut annotations = self.annotations.lock().unwrap();
        let before = annotations.len();
        annotations.retain(|a| &a.id != id);
        if annotations.len() == before {
            return Err(StoreError::NotFound {
                entity: "annotation".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn notify_changed(&self, event: &AnnotationsChanged, suppress: Option<ListenerId>) {
        self.dispatcher
            .lock()
            .unwrap()
            .emit_annotations_changed(event, suppress);
    }
}

/// Listener that records every event it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<AnnotationsChanged>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<AnnotationsChanged> {
        self.events.lock().unwrap().clone()
    }
}

impl AnnotationListener for RecordingListener {
    fn on_annotations_changed(&self, event: &AnnotationsChanged) {
        self.events.lock().unwrap().push(event.clone());
    }
}
