//! Error handling for curator.
//! One error enum per subsystem, `thiserror` only, aggregated by [`CuratorError`].

pub mod config_error;
pub mod error_code;
pub mod partition_error;
pub mod store_error;
pub mod training_error;

pub use config_error::ConfigError;
pub use error_code::CuratorErrorCode;
pub use partition_error::PartitionError;
pub use store_error::StoreError;
pub use training_error::TrainingError;

/// Top-level error surfaced to the session caller.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("partition error: {0}")]
    Partition(#[from] PartitionError),

    #[error("training error: {0}")]
    Training(#[from] TrainingError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CuratorErrorCode for CuratorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Partition(e) => e.error_code(),
            Self::Training(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CuratorResult<T> = Result<T, CuratorError>;
