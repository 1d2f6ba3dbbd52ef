//! # curator-session
//!
//! The review session: owns one cluster map and one scheduler at a time,
//! and routes reviewer decisions to the training-set integrator.

pub mod dependencies;
pub mod filter;
pub mod progress;
pub mod session;

pub use dependencies::SessionDependencies;
pub use filter::PopulationFilter;
pub use progress::SessionProgress;
pub use session::ReviewSession;
