//! Observability for curator.
//! `tracing` crate with `EnvFilter`, span macros and structured event helpers.

pub mod events;
pub mod setup;
pub mod spans;

pub use setup::init_tracing;
