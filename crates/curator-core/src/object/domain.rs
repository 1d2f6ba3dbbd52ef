use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClassLabel, Confidence};

/// Stable key of an object in the external object store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// What kind of object the host hierarchy holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Detection,
    Cell,
    /// Container annotation (including training annotations themselves).
    Annotation,
    /// Point proxy created for a training annotation.
    Point,
}

impl ObjectKind {
    /// Only detections and cells are ever served for review.
    pub fn is_reviewable(self) -> bool {
        matches!(self, ObjectKind::Detection | ObjectKind::Cell)
    }
}

/// Centroid of an object's region in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snapshot of an externally owned, reviewable object.
///
/// The curator never creates or destroys these; it reads them from a
/// [`PopulationSource`](crate::traits::PopulationSource) snapshot and may ask
/// the source to re-label one after review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub class: Option<ClassLabel>,
    #[serde(default)]
    pub confidence: Confidence,
    pub centroid: Point2,
}

impl DomainObject {
    pub fn new(
        id: impl Into<String>,
        class: Option<ClassLabel>,
        confidence: Confidence,
        centroid: Point2,
    ) -> Self {
        Self {
            id: ObjectId::new(id),
            kind: ObjectKind::Detection,
            class,
            confidence,
            centroid,
        }
    }

    pub fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }
}
