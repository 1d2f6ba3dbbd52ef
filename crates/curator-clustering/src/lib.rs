//! # curator-clustering
//!
//! Population → cluster map: feature extraction → clusterable units →
//! optional PCA → pluggable clustering primitive (built-in k-means++,
//! DBSCAN and HDBSCAN) → per-cluster confidence sort.

pub mod cluster_map;
pub mod dbscan;
pub mod features;
pub mod hdbscan_adapter;
pub mod kmeans;
pub mod partitioner;
pub mod reduction;
pub mod strategy;
pub mod unit;

pub use cluster_map::{ClusterMap, ClusterSummary};
pub use dbscan::DbscanClusterer;
pub use features::{FeatureExtractor, MissingMeasurement};
pub use hdbscan_adapter::HdbscanClusterer;
pub use kmeans::KMeansClusterer;
pub use partitioner::Partitioner;
pub use reduction::PcaReducer;
pub use strategy::ClusteringStrategy;
pub use unit::{build_units, wrap, wrap_vector};
