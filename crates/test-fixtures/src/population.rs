//! In-memory population source and measurement table.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use curator_core::errors::StoreError;
use curator_core::traits::{MeasurementLookup, PopulationSource};
use curator_core::{ClassLabel, Confidence, DomainObject, ObjectId, ObjectKind, Point2};
use serde::Deserialize;

/// Population held in a `Vec`, with a log of every reclassification.
#[derive(Default)]
pub struct InMemoryPopulation {
    objects: Mutex<Vec<DomainObject>>,
    reclassified: Mutex<Vec<(ObjectId, ClassLabel, Confidence)>>,
    unavailable: Mutex<bool>,
}

impl InMemoryPopulation {
    pub fn new(objects: Vec<DomainObject>) -> Self {
        Self {
            objects: Mutex::new(objects),
            ..Default::default()
        }
    }

    /// Replace the population, as if the hierarchy had changed.
    pub fn replace(&self, objects: Vec<DomainObject>) {
        *self.objects.lock().unwrap() = objects;
    }

    /// Make subsequent snapshots fail.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    pub fn reclassified(&self) -> Vec<(ObjectId, ClassLabel, Confidence)> {
        self.reclassified.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<DomainObject> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id.as_str() == id)
            .cloned()
    }
}

impl PopulationSource for InMemoryPopulation {
    fn snapshot(&self) -> Result<Vec<DomainObject>, StoreError> {
        if *self.unavailable.lock().unwrap() {
            return Err(StoreError::Unavailable {
                reason: "population offline".to_string(),
            });
        }
        Ok(self.objects.lock().unwrap().clone())
    }

    fn set_classification(
        &self,
        id: &ObjectId,
        class: &ClassLabel,
        confidence: Confidence,
    ) -> Result<(), StoreError> {
        let mut objects = self.objects.lock().unwrap();
        let object = objects
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "object".to_string(),
                id: id.to_string(),
            })?;
        object.class = Some(class.clone());
        object.confidence = confidence;
        self.reclassified
            .lock()
            .unwrap()
            .push((id.clone(), class.clone(), confidence));
        Ok(())
    }
}

/// Measurement table keyed by object id. Name order follows insertion.
#[derive(Debug, Default, Clone)]
pub struct MapMeasurements {
    values: HashMap<ObjectId, Vec<(String, f64)>>,
}

impl MapMeasurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, name: &str, value: f64) {
        let row = self.values.entry(ObjectId::new(id)).or_default();
        match row.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => row.push((name.to_string(), value)),
        }
    }

    /// Builder form: one object's measurements in order.
    pub fn with(mut self, id: &str, values: &[(&str, f64)]) -> Self {
        for (name, value) in values {
            self.insert(id, name, *value);
        }
        self
    }

    /// Number of objects with at least one measurement.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl MeasurementLookup for MapMeasurements {
    fn measurement(&self, object: &DomainObject, name: &str) -> Option<f64> {
        self.values
            .get(&object.id)?
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    fn measurement_names(&self, object: &DomainObject) -> Vec<String> {
        self.values
            .get(&object.id)
            .map(|row| row.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }
}

/// One object in a population dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureObject {
    pub id: String,
    #[serde(default = "default_kind")]
    pub kind: ObjectKind,
    pub class: Option<String>,
    /// Absent means the classifier produced no probability.
    pub confidence: Option<f64>,
    pub centroid: [f64; 2],
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
}

fn default_kind() -> ObjectKind {
    ObjectKind::Detection
}

/// A population dataset as stored under `data/populations/`.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationFixture {
    pub name: String,
    pub objects: Vec<FixtureObject>,
}

impl PopulationFixture {
    /// Split into domain objects and their measurement table.
    pub fn into_parts(self) -> (Vec<DomainObject>, MapMeasurements) {
        let mut lookup = MapMeasurements::new();
        let objects = self
            .objects
            .into_iter()
            .map(|f| {
                for (name, value) in &f.measurements {
                    lookup.insert(&f.id, name, *value);
                }
                let confidence = f.confidence.map_or(Confidence::UNDEFINED, Confidence::new);
                DomainObject::new(
                    f.id,
                    f.class.map(ClassLabel::new),
                    confidence,
                    Point2::new(f.centroid[0], f.centroid[1]),
                )
                .with_kind(f.kind)
            })
            .collect();
        (objects, lookup)
    }
}
