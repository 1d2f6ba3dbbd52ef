//! EventDispatcher: synchronous fan-out used by annotation store implementations.

use std::sync::Arc;

use super::handler::AnnotationListener;
use super::types::{AnnotationsChanged, ListenerId};

/// Synchronous dispatcher over registered listeners.
///
/// A listener that panics is logged and skipped; later listeners still
/// receive the event.
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, Arc<dyn AnnotationListener>)>,
    next_id: u64,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener and return its handle.
    pub fn register(&mut self, listener: Arc<dyn AnnotationListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Emit to every listener except `suppress`.
    pub fn emit_annotations_changed(
        &self,
        event: &AnnotationsChanged,
        suppress: Option<ListenerId>,
    ) {
        for (id, listener) in &self.listeners {
            if Some(*id) == suppress {
                continue;
            }
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                listener.on_annotations_changed(event);
            }));
            if result.is_err() {
                tracing::warn!(listener = id.0, "annotation listener panicked; continuing");
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
