//! Top-level curator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, FeatureConfig, ObservabilityConfig, PartitionConfig, PopulationConfig, SessionConfig,
    DensityPrimitive, ProposalMode, StrategyKind, TrainingConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CURATOR_*`)
/// 2. Config file passed to [`CuratorConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CuratorConfig {
    pub features: FeatureConfig,
    pub partition: PartitionConfig,
    pub population: PopulationConfig,
    pub training: TrainingConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl CuratorConfig {
    /// Load configuration from `path` (if it exists), apply env overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply `CURATOR_*` overrides read through `lookup`.
    ///
    /// Recognised keys: `CURATOR_CLUSTER_COUNT`, `CURATOR_STRATEGY`
    /// (`partitional` | `density`), `CURATOR_PROPOSAL`
    /// (`clustered` | `sorted` | `random`), `CURATOR_LOG_LEVEL`.
    pub fn apply_env_overrides<F>(config: &mut CuratorConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("CURATOR_CLUSTER_COUNT") {
            config.partition.cluster_count =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: "CURATOR_CLUSTER_COUNT".to_string(),
                        message: format!("not a non-negative integer: {raw}"),
                    })?;
        }
        if let Some(raw) = lookup("CURATOR_STRATEGY") {
            config.partition.strategy = match raw.trim() {
                "partitional" => StrategyKind::Partitional,
                "density" => StrategyKind::Density,
                other => {
                    return Err(ConfigError::ValidationFailed {
                        field: "CURATOR_STRATEGY".to_string(),
                        message: format!("unknown strategy: {other}"),
                    })
                }
            };
        }
        if let Some(raw) = lookup("CURATOR_PROPOSAL") {
            config.session.proposal = match raw.trim() {
                "clustered" => ProposalMode::Clustered,
                "sorted" => ProposalMode::Sorted,
                "random" => ProposalMode::Random,
                other => {
                    return Err(ConfigError::ValidationFailed {
                        field: "CURATOR_PROPOSAL".to_string(),
                        message: format!("unknown proposal: {other}"),
                    })
                }
            };
        }
        if let Some(level) = lookup("CURATOR_LOG_LEVEL") {
            config.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(config: &CuratorConfig) -> Result<(), ConfigError> {
        if !(config.partition.eps.is_finite() && config.partition.eps > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "partition.eps".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if config.partition.min_pts == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "partition.min_pts".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.partition.density_primitive == DensityPrimitive::Hdbscan
            && config.partition.eps != defaults::DEFAULT_EPS
        {
            return Err(ConfigError::ValidationFailed {
                field: "partition.eps".to_string(),
                message: "hdbscan has no neighbourhood radius; use density_primitive = \"dbscan\""
                    .to_string(),
            });
        }
        if config.partition.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "partition.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.partition.reduce_dimensions && config.partition.components == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "partition.components".to_string(),
                message: "must be greater than 0 when reduce_dimensions is set".to_string(),
            });
        }
        if !config.features.fill_value.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "features.fill_value".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if config.training.annotation_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "training.annotation_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
