//! Span definitions for the expensive or state-changing operations.

/// Create a partition span.
#[macro_export]
macro_rules! partition_span {
    ($strategy:expr, $population:expr) => {
        ::tracing::info_span!("curator.partition", strategy = %$strategy, population = $population)
    };
}

/// Create a commit span.
#[macro_export]
macro_rules! commit_span {
    ($object_id:expr) => {
        ::tracing::info_span!("curator.commit", object_id = %$object_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PARTITION: &str = "curator.partition";
    pub const COMMIT: &str = "curator.commit";
}
