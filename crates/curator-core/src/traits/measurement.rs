use crate::object::DomainObject;

/// Named-measurement lookup on a domain object.
pub trait MeasurementLookup: Send + Sync {
    /// Value of measurement `name`, or `None` when the object lacks it.
    fn measurement(&self, object: &DomainObject, name: &str) -> Option<f64>;

    /// All measurement names available on `object`, in the store's order.
    fn measurement_names(&self, object: &DomainObject) -> Vec<String>;
}
