//! Feature Extractor: named measurements → fixed-order feature vector.

use curator_core::config::{FeatureConfig, MissingPolicy};
use curator_core::traits::MeasurementLookup;
use curator_core::{DomainObject, FeatureVector};

/// Behaviour for a configured measurement the object does not carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissingMeasurement {
    /// Drop the value. The vector comes out shorter, and the partitioner
    /// rejects the population if lengths then disagree.
    Omit,
    /// Substitute a constant.
    Fill(f64),
}

/// Pure mapping from an object to its feature vector.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    names: Vec<String>,
    missing: MissingMeasurement,
}

impl FeatureExtractor {
    pub fn new(names: Vec<String>, missing: MissingMeasurement) -> Self {
        Self { names, missing }
    }

    /// Build from config. With no configured names, the shape factors of the
    /// first object in `population` are used.
    pub fn from_config(
        config: &FeatureConfig,
        lookup: &dyn MeasurementLookup,
        population: &[DomainObject],
    ) -> Self {
        let missing = match config.missing {
            MissingPolicy::Omit => MissingMeasurement::Omit,
            MissingPolicy::Fill => MissingMeasurement::Fill(config.fill_value),
        };
        let names = if config.measurement_names.is_empty() {
            population
                .first()
                .map(|o| shape_factors(&lookup.measurement_names(o), &config.excluded_tokens))
                .unwrap_or_default()
        } else {
            config.measurement_names.clone()
        };
        Self::new(names, missing)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Extract the configured measurements from `object`, in order.
    pub fn extract(&self, object: &DomainObject, lookup: &dyn MeasurementLookup) -> FeatureVector {
        let mut values = Vec::with_capacity(self.names.len());
        for name in &self.names {
            match (lookup.measurement(object, name), self.missing) {
                (Some(v), _) => values.push(v),
                (None, MissingMeasurement::Fill(fill)) => values.push(fill),
                (None, MissingMeasurement::Omit) => {}
            }
        }
        FeatureVector::new(values)
    }
}

/// Measurement names that describe shape rather than position or stain
/// channels: every name containing none of `excluded`.
pub fn shape_factors(available: &[String], excluded: &[String]) -> Vec<String> {
    available
        .iter()
        .filter(|name| !excluded.iter().any(|token| name.contains(token.as_str())))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{Confidence, Point2};
    use std::collections::HashMap;

    struct MapLookup(HashMap<&'static str, f64>);

    impl MeasurementLookup for MapLookup {
        fn measurement(&self, _object: &DomainObject, name: &str) -> Option<f64> {
            self.0.get(name).copied()
        }
        fn measurement_names(&self, _object: &DomainObject) -> Vec<String> {
            let mut names: Vec<String> = self.0.keys().map(|k| k.to_string()).collect();
            names.sort();
            names
        }
    }

    fn object() -> DomainObject {
        DomainObject::new("o1", Some("Tumor".into()), Confidence::new(0.4), Point2::new(0.0, 0.0))
    }

    fn lookup() -> MapLookup {
        MapLookup(HashMap::from([
            ("Area", 12.0),
            ("Perimeter", 4.0),
            ("Centroid X", 100.0),
            ("Cell: Eosin OD mean", 0.3),
            ("Circularity", 0.9),
        ]))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_in_configured_order() {
        let ex = FeatureExtractor::new(names(&["Perimeter", "Area"]), MissingMeasurement::Omit);
        assert_eq!(ex.extract(&object(), &lookup()).as_slice(), &[4.0, 12.0]);
    }

    #[test]
    fn omit_produces_shorter_vector() {
        let ex = FeatureExtractor::new(names(&["Area", "Solidity"]), MissingMeasurement::Omit);
        assert_eq!(ex.extract(&object(), &lookup()).len(), 1);
    }

    #[test]
    fn fill_substitutes_missing() {
        let ex = FeatureExtractor::new(names(&["Solidity", "Area"]), MissingMeasurement::Fill(-1.0));
        assert_eq!(ex.extract(&object(), &lookup()).as_slice(), &[-1.0, 12.0]);
    }

    #[test]
    fn empty_name_list_yields_empty_vector() {
        let ex = FeatureExtractor::new(vec![], MissingMeasurement::Omit);
        assert!(ex.extract(&object(), &lookup()).is_empty());
    }

    #[test]
    fn shape_factors_drop_position_and_channel_measurements() {
        let config = FeatureConfig::default();
        let ex = FeatureExtractor::from_config(&config, &lookup(), &[object()]);
        assert_eq!(ex.names(), &names(&["Area", "Circularity", "Perimeter"])[..]);
    }

    #[test]
    fn configured_names_win_over_shape_factors() {
        let config = FeatureConfig {
            measurement_names: names(&["Centroid X"]),
            ..Default::default()
        };
        let ex = FeatureExtractor::from_config(&config, &lookup(), &[object()]);
        assert_eq!(ex.names(), &names(&["Centroid X"])[..]);
    }
}
