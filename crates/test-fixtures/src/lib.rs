//! Test fixtures for the curator workspace: JSON population datasets and
//! in-memory doubles of the external collaborators.

pub mod builders;
pub mod clusterers;
pub mod population;
pub mod store;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use builders::{object, object_at, undefined};
pub use clusterers::{CountingClusterer, FailingClusterer, ScriptedClusterer, ScriptedDensity};
pub use population::{InMemoryPopulation, MapMeasurements, PopulationFixture};
pub use store::{InMemoryAnnotationStore, RecordingListener};

/// Root directory of the fixture datasets.
fn fixtures_root() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load a population dataset from `data/populations/<name>.json`.
pub fn load_population(name: &str) -> PopulationFixture {
    load_fixture(&format!("populations/{name}.json"))
}
