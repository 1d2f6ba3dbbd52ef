use serde::{Deserialize, Serialize};

use super::defaults;

/// How a reviewed object is recognised inside another class's annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCriterion {
    /// Exact centroid equality. Survives sessions where object ids change.
    Centroid,
    /// Stable object id from the external store.
    ObjectKey,
}

/// Training-set integration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Name shared by every training annotation this tool manages.
    pub annotation_name: String,
    pub duplicate_criterion: DuplicateCriterion,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            annotation_name: defaults::DEFAULT_ANNOTATION_NAME.to_string(),
            duplicate_criterion: DuplicateCriterion::Centroid,
        }
    }
}
