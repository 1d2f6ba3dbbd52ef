use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do when an object lacks one of the configured measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Skip the value; the vector comes out shorter.
    Omit,
    /// Substitute `fill_value`.
    Fill,
}

/// Feature extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Ordered measurement names. Empty selects shape factors automatically.
    pub measurement_names: Vec<String>,
    /// Name fragments excluded by automatic shape-factor selection.
    pub excluded_tokens: Vec<String>,
    pub missing: MissingPolicy,
    pub fill_value: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            measurement_names: Vec::new(),
            excluded_tokens: defaults::DEFAULT_EXCLUDED_TOKENS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            missing: MissingPolicy::Omit,
            fill_value: defaults::DEFAULT_FILL_VALUE,
        }
    }
}
