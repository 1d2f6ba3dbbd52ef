use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::DomainObject;

/// Fixed-length numeric representation of an object, one value per
/// configured measurement. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// The unit a clustering primitive operates on: one object plus its features.
///
/// The object is shared, so discarding a partition never touches the
/// underlying snapshot.
#[derive(Debug, Clone)]
pub struct ClusterableUnit {
    object: Arc<DomainObject>,
    features: FeatureVector,
}

impl ClusterableUnit {
    pub fn new(object: Arc<DomainObject>, features: FeatureVector) -> Self {
        Self { object, features }
    }

    pub fn object(&self) -> &Arc<DomainObject> {
        &self.object
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    /// Feature values as a point, the way clustering libraries expect them.
    pub fn point(&self) -> &[f64] {
        self.features.as_slice()
    }
}
