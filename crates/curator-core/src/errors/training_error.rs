//! Training-set integration errors.

use super::error_code::{self, CuratorErrorCode};
use super::StoreError;

/// Errors raised while committing a review into the training set.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("object {object_id} has no usable class label")]
    InvalidLabel { object_id: String },

    #[error("annotation store failed during commit: {0}")]
    Store(#[from] StoreError),
}

impl CuratorErrorCode for TrainingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLabel { .. } => error_code::INVALID_LABEL,
            Self::Store(e) => e.error_code(),
        }
    }
}
