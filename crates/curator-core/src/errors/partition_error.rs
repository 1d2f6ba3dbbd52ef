//! Partition (clustering) errors.

use super::error_code::{self, CuratorErrorCode};

/// Errors raised while turning a population into a cluster map.
///
/// Any of these leaves the previously installed partition untouched.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    #[error("clustering primitive {primitive} failed: {reason}")]
    PrimitiveFailed { primitive: String, reason: String },

    #[error("clustering primitive {primitive} returned an inconsistent result: {reason}")]
    InconsistentShape { primitive: String, reason: String },

    #[error("object {object_id} has {found} features, expected {expected}")]
    RaggedFeatures {
        object_id: String,
        expected: usize,
        found: usize,
    },

    #[error("no clustering primitive configured for strategy {strategy}")]
    MissingPrimitive { strategy: String },

    #[error("dimensionality reduction failed: {reason}")]
    ReductionFailed { reason: String },
}

impl CuratorErrorCode for PartitionError {
    fn error_code(&self) -> &'static str {
        error_code::PARTITION_FAILURE
    }
}
