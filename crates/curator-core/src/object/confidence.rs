use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Classification confidence of an auto-classified object.
///
/// Finite values are clamped to [0.0, 1.0]. NaN is kept as-is and means the
/// classifier produced no probability for the object.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// No probability available.
    pub const UNDEFINED: Confidence = Confidence(f64::NAN);
    /// Confidence assigned to an object once a reviewer has looked at it.
    pub const REVIEWED: Confidence = Confidence(1.0);

    /// Create a new Confidence, clamping finite values to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::UNDEFINED
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the raw f64 value (may be NaN).
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the classifier left this object without a probability.
    pub fn is_undefined(self) -> bool {
        self.0.is_nan()
    }

    /// Ordering used for review queues: undefined first, then ascending.
    ///
    /// Total over all values, so it is safe for `sort_by`.
    pub fn review_order(self, other: Self) -> Ordering {
        match (self.is_undefined(), other.is_undefined()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.total_cmp(&other.0),
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "undefined")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_finite_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(0.42).value(), 0.42);
    }

    #[test]
    fn nan_is_preserved_as_undefined() {
        let c = Confidence::new(f64::NAN);
        assert!(c.is_undefined());
        assert_eq!(c.to_string(), "undefined");
    }

    #[test]
    fn undefined_sorts_before_everything() {
        let mut values = vec![
            Confidence::new(0.9),
            Confidence::UNDEFINED,
            Confidence::new(0.0),
            Confidence::new(0.5),
        ];
        values.sort_by(|a, b| a.review_order(*b));
        assert!(values[0].is_undefined());
        assert_eq!(values[1].value(), 0.0);
        assert_eq!(values[2].value(), 0.5);
        assert_eq!(values[3].value(), 0.9);
    }

    #[test]
    fn two_undefined_compare_equal() {
        assert_eq!(
            Confidence::UNDEFINED.review_order(Confidence::UNDEFINED),
            Ordering::Equal
        );
    }
}
