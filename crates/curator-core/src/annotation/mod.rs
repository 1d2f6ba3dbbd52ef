//! Training annotations: per-class containers of reviewer-confirmed examples.

pub mod training_annotation;

pub use training_annotation::{AnnotationId, TrainingAnnotation, TrainingMember};
