//! Forward-only iteration position within one cluster.

use std::sync::Arc;

use curator_clustering::ClusterMap;
use curator_core::DomainObject;

/// Stateful cursor over the members of one cluster. Never rewinds.
#[derive(Debug, Clone)]
pub struct Cursor {
    cluster_id: usize,
    position: usize,
}

impl Cursor {
    pub fn new(cluster_id: usize) -> Self {
        Self {
            cluster_id,
            position: 0,
        }
    }

    pub fn cluster_id(&self) -> usize {
        self.cluster_id
    }

    /// Members consumed so far.
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Consume the next member of this cursor's cluster in `map`.
    pub fn advance(&mut self, map: &ClusterMap) -> Option<Arc<DomainObject>> {
        let unit = map.cluster(self.cluster_id)?.get(self.position)?;
        self.position += 1;
        Some(Arc::clone(unit.object()))
    }
}
