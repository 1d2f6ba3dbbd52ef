//! # curator-training
//!
//! Training-set integration: a reviewed object ends up in exactly one
//! training annotation, the one for its confirmed class.

pub mod duplicates;
pub mod integrator;

pub use integrator::{CommitOutcome, TrainingSetIntegrator};
