//! Principal component projection for wide feature spaces.
//!
//! Power iteration with deflation on the covariance matrix. Adequate for
//! the handful of components a review scatter plot needs.

use curator_core::traits::DimensionalityReducer;

const MAX_ITERATIONS: usize = 500;
const TOLERANCE: f64 = 1e-10;

/// Projects rows onto their leading principal components.
#[derive(Debug, Clone, Copy)]
pub struct PcaReducer {
    components: usize,
}

impl PcaReducer {
    pub fn new(components: usize) -> Self {
        Self { components }
    }
}

impl DimensionalityReducer for PcaReducer {
    fn reduce(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, String> {
        let Some(dims) = rows.first().map(Vec::len) else {
            return Ok(Vec::new());
        };
        if rows.iter().any(|r| r.len() != dims) {
            return Err("rows differ in length".to_string());
        }
        if rows.iter().flatten().any(|v| !v.is_finite()) {
            return Err("non-finite feature value".to_string());
        }
        if dims <= self.components {
            return Ok(rows.to_vec());
        }

        let centred = centre(rows, dims);
        let mut cov = covariance(&centred, dims);
        let mut axes = Vec::with_capacity(self.components);
        for c in 0..self.components {
            let (value, axis) = leading_eigenpair(&cov, c);
            deflate(&mut cov, value, &axis);
            axes.push(axis);
        }

        Ok(centred
            .iter()
            .map(|row| axes.iter().map(|axis| dot(row, axis)).collect())
            .collect())
    }

    fn components(&self) -> usize {
        self.components
    }
}

fn centre(rows: &[Vec<f64>], dims: usize) -> Vec<Vec<f64>> {
    let n = rows.len() as f64;
    let mut mean = vec![0.0; dims];
    for row in rows {
        for (m, v) in mean.iter_mut().zip(row) {
            *m += v / n;
        }
    }
    rows.iter()
        .map(|row| row.iter().zip(&mean).map(|(v, m)| v - m).collect())
        .collect()
}

fn covariance(centred: &[Vec<f64>], dims: usize) -> Vec<Vec<f64>> {
    let denom = (centred.len().max(2) - 1) as f64;
    let mut cov = vec![vec![0.0; dims]; dims];
    for row in centred {
        for i in 0..dims {
            for j in i..dims {
                cov[i][j] += row[i] * row[j] / denom;
            }
        }
    }
    for i in 0..dims {
        for j in 0..i {
            cov[i][j] = cov[j][i];
        }
    }
    cov
}

/// Dominant eigenvector of a symmetric matrix, sign-normalised so its
/// largest-magnitude entry is positive.
fn leading_eigenpair(matrix: &[Vec<f64>], seed: usize) -> (f64, Vec<f64>) {
    let dims = matrix.len();
    let mut v = vec![1.0; dims];
    v[seed % dims] += 1.0;
    normalise(&mut v);

    let mut value = 0.0;
    for _ in 0..MAX_ITERATIONS {
        let mut next: Vec<f64> = matrix.iter().map(|row| dot(row, &v)).collect();
        let norm = dot(&next, &next).sqrt();
        if norm < TOLERANCE {
            // Remaining variance is zero; any unit axis will do.
            value = 0.0;
            break;
        }
        next.iter_mut().for_each(|x| *x /= norm);
        let delta: f64 = next.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = next;
        value = norm;
        if delta < TOLERANCE {
            break;
        }
    }

    let pivot = v
        .iter()
        .copied()
        .fold(0.0_f64, |acc, x| if x.abs() > acc.abs() { x } else { acc });
    if pivot < 0.0 {
        v.iter_mut().for_each(|x| *x = -*x);
    }
    (value, v)
}

fn deflate(matrix: &mut [Vec<f64>], value: f64, axis: &[f64]) {
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell -= value * axis[i] * axis[j];
        }
    }
}

fn normalise(v: &mut [f64]) {
    let norm = dot(v, v).sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
