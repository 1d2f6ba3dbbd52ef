//! Configuration system for curator.
//! TOML-based, resolution: env (`CURATOR_*`) > file > compiled defaults.

pub mod curator_config;
pub mod defaults;
pub mod feature_config;
pub mod observability_config;
pub mod partition_config;
pub mod population_config;
pub mod session_config;
pub mod training_config;

pub use curator_config::CuratorConfig;
pub use feature_config::{FeatureConfig, MissingPolicy};
pub use observability_config::ObservabilityConfig;
pub use partition_config::{DensityPrimitive, PartitionConfig, StrategyKind};
pub use population_config::PopulationConfig;
pub use session_config::{ProposalMode, SessionConfig};
pub use training_config::{DuplicateCriterion, TrainingConfig};
