//! External collaborators a session is built from.

use std::sync::Arc;

use curator_core::events::ListenerId;
use curator_core::traits::{
    AnnotationStore, DensityClusterer, DimensionalityReducer, MeasurementLookup,
    PartitionalClusterer, PopulationSource,
};

/// Everything a [`ReviewSession`](crate::ReviewSession) talks to.
///
/// Clustering primitives are optional. Without one the session uses the
/// built-in k-means++ for partitional strategies and the configured DBSCAN
/// or HDBSCAN for density strategies. Without a reducer, PCA is used when
/// the config enables dimensionality reduction.
pub struct SessionDependencies {
    pub population: Arc<dyn PopulationSource>,
    pub measurements: Arc<dyn MeasurementLookup>,
    pub annotations: Arc<dyn AnnotationStore>,
    pub partitional: Option<Box<dyn PartitionalClusterer>>,
    pub density: Option<Box<dyn DensityClusterer>>,
    pub reducer: Option<Box<dyn DimensionalityReducer>>,
    /// Listener registration of the host view driving this session.
    pub origin: Option<ListenerId>,
}

impl SessionDependencies {
    pub fn new(
        population: Arc<dyn PopulationSource>,
        measurements: Arc<dyn MeasurementLookup>,
        annotations: Arc<dyn AnnotationStore>,
    ) -> Self {
        Self {
            population,
            measurements,
            annotations,
            partitional: None,
            density: None,
            reducer: None,
            origin: None,
        }
    }

    pub fn with_partitional(mut self, clusterer: Box<dyn PartitionalClusterer>) -> Self {
        self.partitional = Some(clusterer);
        self
    }

    pub fn with_density(mut self, clusterer: Box<dyn DensityClusterer>) -> Self {
        self.density = Some(clusterer);
        self
    }

    pub fn with_reducer(mut self, reducer: Box<dyn DimensionalityReducer>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    pub fn with_origin(mut self, origin: ListenerId) -> Self {
        self.origin = Some(origin);
        self
    }
}
