//! Reviewable-object filter applied to every population snapshot.

use std::collections::HashSet;

use curator_core::config::PopulationConfig;
use curator_core::DomainObject;
use tracing::warn;

/// Keeps detections and cells that carry a real class.
#[derive(Debug, Clone)]
pub struct PopulationFilter {
    background_class: String,
}

impl PopulationFilter {
    pub fn new(background_class: impl Into<String>) -> Self {
        Self {
            background_class: background_class.into(),
        }
    }

    pub fn from_config(config: &PopulationConfig) -> Self {
        Self::new(config.background_class.clone())
    }

    pub fn accepts(&self, object: &DomainObject) -> bool {
        object.kind.is_reviewable()
            && object
                .class
                .as_ref()
                .is_some_and(|c| !c.is_background(&self.background_class))
    }

    /// Reviewable objects of `objects`, each id once. A repeated id keeps
    /// its first occurrence.
    pub fn apply(&self, objects: Vec<DomainObject>) -> Vec<DomainObject> {
        let mut seen = HashSet::new();
        let mut duplicates = 0usize;
        let kept: Vec<DomainObject> = objects
            .into_iter()
            .filter(|o| self.accepts(o))
            .filter(|o| {
                let fresh = seen.insert(o.id.clone());
                if !fresh {
                    duplicates += 1;
                }
                fresh
            })
            .collect();
        if duplicates > 0 {
            warn!(duplicates, "snapshot repeated object ids, keeping first occurrence");
        }
        kept
    }
}
