//! Clusterable Wrapper: pairs an object with its feature vector.

use std::sync::Arc;

use curator_core::traits::MeasurementLookup;
use curator_core::{ClusterableUnit, DomainObject, FeatureVector};
use rayon::prelude::*;

use crate::features::FeatureExtractor;

/// Wrap an object, extracting its features by name.
pub fn wrap(
    object: Arc<DomainObject>,
    extractor: &FeatureExtractor,
    lookup: &dyn MeasurementLookup,
) -> ClusterableUnit {
    let features = extractor.extract(&object, lookup);
    ClusterableUnit::new(object, features)
}

/// Wrap an object with a precomputed feature vector.
pub fn wrap_vector(object: Arc<DomainObject>, features: FeatureVector) -> ClusterableUnit {
    ClusterableUnit::new(object, features)
}

/// Wrap a whole population, preserving input order.
pub fn build_units(
    objects: &[Arc<DomainObject>],
    extractor: &FeatureExtractor,
    lookup: &dyn MeasurementLookup,
) -> Vec<ClusterableUnit> {
    objects
        .par_iter()
        .map(|o| wrap(Arc::clone(o), extractor, lookup))
        .collect()
}
