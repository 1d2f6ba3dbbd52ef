//! Shorthand constructors for domain objects.

use curator_core::{Confidence, DomainObject, Point2};

/// Classified detection at the origin.
pub fn object(id: &str, class: &str, confidence: f64) -> DomainObject {
    object_at(id, class, confidence, 0.0, 0.0)
}

/// Classified detection at `(x, y)`.
pub fn object_at(id: &str, class: &str, confidence: f64, x: f64, y: f64) -> DomainObject {
    DomainObject::new(
        id,
        Some(class.into()),
        Confidence::new(confidence),
        Point2::new(x, y),
    )
}

/// Classified detection without a classifier probability.
pub fn undefined(id: &str, class: &str) -> DomainObject {
    DomainObject::new(id, Some(class.into()), Confidence::UNDEFINED, Point2::new(0.0, 0.0))
}
