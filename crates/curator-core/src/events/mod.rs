//! Annotation change notifications.
//! Synchronous dispatch with per-emit suppression of the originating listener.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AnnotationListener;
pub use types::{AnnotationsChanged, ListenerId};
