use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a classification class (e.g. "Tumor", "Stroma").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassLabel(String);

impl ClassLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this label names the configured background sentinel.
    pub fn is_background(&self, background: &str) -> bool {
        self.0 == background
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassLabel {
    fn from(value: String) -> Self {
        Self(value)
    }
}
