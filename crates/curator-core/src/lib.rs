//! # curator-core
//!
//! Foundation crate for the curator active-learning scheduler.
//! Defines the domain snapshot types, the external-collaborator traits,
//! errors, config, annotation change events and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod annotation;
pub mod config;
pub mod errors;
pub mod events;
pub mod object;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use annotation::{AnnotationId, TrainingAnnotation, TrainingMember};
pub use config::CuratorConfig;
pub use errors::{CuratorError, CuratorResult};
pub use object::{
    ClassLabel, ClusterableUnit, Confidence, DomainObject, FeatureVector, ObjectId, ObjectKind,
    Point2,
};
