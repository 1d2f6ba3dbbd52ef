// Single source of truth for all default values.

// --- Features ---
pub const DEFAULT_EXCLUDED_TOKENS: &[&str] = &["Centroid", "Cell", "Cytoplasm", "Channel"];
pub const DEFAULT_FILL_VALUE: f64 = 0.0;

// --- Partition ---
pub const DEFAULT_CLUSTER_COUNT: usize = 5;
pub const DEFAULT_EPS: f64 = 0.5;
pub const DEFAULT_MIN_PTS: usize = 4;
pub const DEFAULT_REDUCE_DIMENSIONS: bool = true;
pub const DEFAULT_COMPONENTS: usize = 2;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// --- Population ---
pub const DEFAULT_BACKGROUND_CLASS: &str = "Image";

// --- Training ---
pub const DEFAULT_ANNOTATION_NAME: &str = "Active Learning";

// --- Session ---
pub const DEFAULT_RECLUSTER_AFTER_COMMITS: usize = 0; // never
pub const DEFAULT_RECLUSTER_ON_COUNT_CHANGE: bool = false;
pub const DEFAULT_MARK_REVIEWED_CONFIDENT: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
