//! Stable string codes for errors crossing the host boundary.

/// Every curator error enum maps to a stable code a host UI can switch on.
pub trait CuratorErrorCode {
    /// Returns the error code string (e.g., "PARTITION_FAILURE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARTITION_FAILURE: &str = "PARTITION_FAILURE";
pub const INVALID_LABEL: &str = "INVALID_LABEL";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
