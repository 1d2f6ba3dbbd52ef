//! Errors reported by external stores (population, annotations).

use super::error_code::{self, CuratorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("store rejected the change: {reason}")]
    Rejected { reason: String },
}

impl CuratorErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
