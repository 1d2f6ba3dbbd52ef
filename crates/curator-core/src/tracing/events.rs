//! Structured log events for key scheduler operations.

/// Log a freshly built partition.
pub fn partition_built(strategy: &str, clusters: usize, population: usize, bypassed: bool) {
    ::tracing::info!(
        event = "partition_built",
        strategy = %strategy,
        clusters = clusters,
        population = population,
        bypassed = bypassed,
        "partition built"
    );
}

/// Log one object being served.
pub fn sample_served(object_id: &str, cluster_id: usize, cluster_count: usize) {
    ::tracing::debug!(
        event = "sample_served",
        object_id = %object_id,
        cluster_id = cluster_id,
        cluster_count = cluster_count,
        "sample served"
    );
}

/// Log a committed review.
pub fn review_committed(object_id: &str, class: &str, inserted: bool, removed_from: usize) {
    ::tracing::info!(
        event = "review_committed",
        object_id = %object_id,
        class = %class,
        inserted = inserted,
        removed_from = removed_from,
        "review committed"
    );
}
