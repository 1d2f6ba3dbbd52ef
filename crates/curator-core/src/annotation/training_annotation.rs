use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::object::{ClassLabel, DomainObject, ObjectId, Point2};

/// Identifier of an annotation entity in the external annotation store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lightweight point proxy of a reviewed object inside a training annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMember {
    pub object_id: ObjectId,
    pub point: Point2,
}

impl TrainingMember {
    pub fn of(object: &DomainObject) -> Self {
        Self {
            object_id: object.id.clone(),
            point: object.centroid,
        }
    }
}

/// Point-set annotation accumulating reviewer-confirmed examples of one class.
///
/// `region` is always the literal point list of `members`, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAnnotation {
    pub id: AnnotationId,
    pub name: String,
    pub class: ClassLabel,
    pub members: Vec<TrainingMember>,
    pub region: Vec<Point2>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingAnnotation {
    /// New, empty annotation. Stores call this when asked to create one.
    pub fn new(id: AnnotationId, name: impl Into<String>, class: ClassLabel) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            class,
            members: Vec::new(),
            region: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains_object(&self, id: &ObjectId) -> bool {
        self.members.iter().any(|m| &m.object_id == id)
    }

    /// Index of the first member at exactly `point`.
    pub fn position_at(&self, point: Point2) -> Option<usize> {
        self.members.iter().position(|m| m.point == point)
    }

    /// Index of the member proxying object `id`.
    pub fn position_of(&self, id: &ObjectId) -> Option<usize> {
        self.members.iter().position(|m| &m.object_id == id)
    }

    /// Append a member unless that object is already present.
    /// Returns whether the membership changed.
    pub fn insert(&mut self, member: TrainingMember) -> bool {
        if self.contains_object(&member.object_id) {
            return false;
        }
        self.members.push(member);
        self.recompute_region();
        true
    }

    /// Remove the member at `index`, shrinking the region accordingly.
    pub fn remove_at(&mut self, index: usize) -> TrainingMember {
        let removed = self.members.remove(index);
        self.recompute_region();
        removed
    }

    fn recompute_region(&mut self) {
        self.region = self.members.iter().map(|m| m.point).collect();
        self.updated_at = Utc::now();
    }
}
