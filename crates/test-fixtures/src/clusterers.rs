//! Clustering primitive doubles.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use curator_core::traits::{DensityClusterer, PartitionalClusterer};
use curator_core::ClusterableUnit;

fn resolve(script: &[Vec<String>], units: &[ClusterableUnit]) -> Vec<Vec<usize>> {
    script
        .iter()
        .map(|ids| {
            ids.iter()
                .filter_map(|id| units.iter().position(|u| u.object().id.as_str() == id))
                .collect()
        })
        .collect()
}

fn script_of(clusters: &[&[&str]]) -> Vec<Vec<String>> {
    clusters
        .iter()
        .map(|c| c.iter().map(|s| s.to_string()).collect())
        .collect()
}

/// Partitional primitive returning a fixed grouping by object id.
/// Ids not present in the input are skipped; input ids missing from the
/// script are left unassigned.
#[derive(Debug, Clone)]
pub struct ScriptedClusterer {
    script: Vec<Vec<String>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedClusterer {
    pub fn new(clusters: &[&[&str]]) -> Self {
        Self {
            script: script_of(clusters),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, readable after the clusterer is boxed away.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl PartitionalClusterer for ScriptedClusterer {
    fn cluster(
        &self,
        _count: usize,
        units: &[ClusterableUnit],
    ) -> Result<BTreeMap<usize, Vec<usize>>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(resolve(&self.script, units).into_iter().enumerate().collect())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Partitional primitive assigning index `i` to cluster `i % count`.
#[derive(Debug, Clone, Default)]
pub struct CountingClusterer {
    calls: Arc<AtomicUsize>,
    last_count: Arc<AtomicUsize>,
}

impl CountingClusterer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Cluster count requested by the most recent call.
    pub fn last_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.last_count)
    }
}

impl PartitionalClusterer for CountingClusterer {
    fn cluster(
        &self,
        count: usize,
        units: &[ClusterableUnit],
    ) -> Result<BTreeMap<usize, Vec<usize>>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_count.store(count, Ordering::SeqCst);
        let mut out: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for idx in 0..units.len() {
            out.entry(idx % count.max(1)).or_default().push(idx);
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "modulo"
    }
}

/// Primitive that always fails, for both strategy families.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingClusterer;

impl PartitionalClusterer for FailingClusterer {
    fn cluster(
        &self,
        _count: usize,
        _units: &[ClusterableUnit],
    ) -> Result<BTreeMap<usize, Vec<usize>>, String> {
        Err("did not converge".to_string())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

impl DensityClusterer for FailingClusterer {
    fn cluster(
        &self,
        _eps: f64,
        _min_pts: usize,
        _units: &[ClusterableUnit],
    ) -> Result<Vec<Vec<usize>>, String> {
        Err("did not converge".to_string())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Density primitive returning a fixed grouping by object id. Unlisted
/// objects are noise.
#[derive(Debug, Clone)]
pub struct ScriptedDensity {
    script: Vec<Vec<String>>,
}

impl ScriptedDensity {
    pub fn new(clusters: &[&[&str]]) -> Self {
        Self {
            script: script_of(clusters),
        }
    }
}

impl DensityClusterer for ScriptedDensity {
    fn cluster(
        &self,
        _eps: f64,
        _min_pts: usize,
        units: &[ClusterableUnit],
    ) -> Result<Vec<Vec<usize>>, String> {
        Ok(resolve(&self.script, units))
    }

    fn name(&self) -> &str {
        "scripted-density"
    }
}
