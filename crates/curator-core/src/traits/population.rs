use crate::errors::StoreError;
use crate::object::{ClassLabel, Confidence, DomainObject, ObjectId};

/// External object store holding the auto-classified population.
pub trait PopulationSource: Send + Sync {
    /// Current flattened list of candidate objects.
    ///
    /// Implementations should already drop containers and unclassified
    /// objects; the session filters again, so returning extra objects is safe.
    fn snapshot(&self) -> Result<Vec<DomainObject>, StoreError>;

    /// Re-label an object after review.
    fn set_classification(
        &self,
        id: &ObjectId,
        class: &ClassLabel,
        confidence: Confidence,
    ) -> Result<(), StoreError>;
}
