use serde::{Deserialize, Serialize};

use super::defaults;

/// Population filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Class name treated as "not classified".
    pub background_class: String,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            background_class: defaults::DEFAULT_BACKGROUND_CLASS.to_string(),
        }
    }
}
