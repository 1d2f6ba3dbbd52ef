//! Boundaries to the external collaborators the curator is injected with.

pub mod annotation_store;
pub mod clustering;
pub mod measurement;
pub mod population;
pub mod reducer;

pub use annotation_store::AnnotationStore;
pub use clustering::{DensityClusterer, PartitionalClusterer};
pub use measurement::MeasurementLookup;
pub use population::PopulationSource;
pub use reducer::DimensionalityReducer;
