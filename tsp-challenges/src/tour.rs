use crate::DistanceMatrix;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A closed tour `[0, .., 0]` and its total cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tour {
    pub cost: f64,
    pub path: Vec<usize>,
}

impl Tour {
    /// The only tour of a single city graph.
    pub fn trivial(matrix: &DistanceMatrix) -> Self {
        Self {
            cost: matrix.dist(0, 0),
            path: vec![0, 0],
        }
    }
}

const COST_TOLERANCE: f64 = 1e-9;

/// Checks that `tour` is a Hamiltonian cycle through city 0 of `matrix`
/// and that its cost matches the matrix.
pub fn verify_tour(matrix: &DistanceMatrix, tour: &Tour) -> Result<()> {
    let n = matrix.n();
    let path = &tour.path;
    if path.len() != n + 1 {
        return Err(anyhow!(
            "Path length ({}) does not match number of cities + 1 ({})",
            path.len(),
            n + 1
        ));
    }
    if path[0] != 0 || path[n] != 0 {
        return Err(anyhow!("Path must start and end at city 0"));
    }
    let mut visited = vec![false; n];
    for &city in &path[1..n] {
        if city == 0 || city >= n {
            return Err(anyhow!("Path contains invalid city {}", city));
        }
        if visited[city] {
            return Err(anyhow!("Path visits city {} more than once", city));
        }
        visited[city] = true;
    }
    let actual = matrix.tour_cost(path)?;
    if (actual - tour.cost).abs() > COST_TOLERANCE * actual.abs().max(1.0) {
        return Err(anyhow!(
            "Reported cost ({}) does not match path cost ({})",
            tour.cost,
            actual
        ));
    }
    Ok(())
}
