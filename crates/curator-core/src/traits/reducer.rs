/// Feature-space preprocessing applied before units are built.
pub trait DimensionalityReducer: Send + Sync {
    /// Project an n × d matrix (row per object) to n × `components()`.
    fn reduce(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String>;

    /// Target dimensionality.
    fn components(&self) -> usize;
}
