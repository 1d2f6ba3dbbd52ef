//! # curator-scheduler
//!
//! Cluster round-robin: one cursor per cluster, a pointer that sweeps the
//! clusters in ascending id order, and exhaustion encoded as state.
//! A random no-repeat scheduler shares the same [`SampleProposal`] seam.

pub mod cursor;
pub mod outcome;
pub mod proposal;
pub mod random;
pub mod round_robin;

pub use outcome::{SchedulerState, ServeOutcome, Served};
pub use proposal::SampleProposal;
pub use random::RandomScheduler;
pub use round_robin::RoundRobinScheduler;
