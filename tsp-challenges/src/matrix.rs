use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Validated square matrix of finite, non-negative distances stored row-major.
///
/// Symmetry and a zero diagonal are assumed by the solvers but not enforced;
/// see [`DistanceMatrix::is_symmetric`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(anyhow!("Distance matrix must contain at least one city"));
        }
        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(anyhow!(
                    "Distance matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                ));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(anyhow!(
                        "Distance from city {} to city {} must be a finite non-negative number, got {}",
                        i,
                        j,
                        d
                    ));
                }
            }
            weights.extend(row);
        }
        Ok(Self { n, weights })
    }

    pub(crate) fn from_validated(n: usize, weights: Vec<f64>) -> Self {
        debug_assert_eq!(weights.len(), n * n);
        Self { n, weights }
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn dist(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.n + to]
    }

    pub fn row(&self, city: usize) -> &[f64] {
        &self.weights[city * self.n..(city + 1) * self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.weights.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.dist(i, j) == self.dist(j, i)))
    }

    /// Sum of the edge weights along consecutive cities of `path`.
    pub fn tour_cost(&self, path: &[usize]) -> Result<f64> {
        if let Some(&city) = path.iter().find(|&&city| city >= self.n) {
            return Err(anyhow!(
                "Path contains city {} but the graph only has {} cities",
                city,
                self.n
            ));
        }
        Ok(path.windows(2).map(|w| self.dist(w[0], w[1])).sum())
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = anyhow::Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}
