//! Domain snapshot types: the objects under review and their clustering wrappers.

pub mod class_label;
pub mod confidence;
pub mod domain;
pub mod feature;

pub use class_label::ClassLabel;
pub use confidence::Confidence;
pub use domain::{DomainObject, ObjectId, ObjectKind, Point2};
pub use feature::{ClusterableUnit, FeatureVector};
