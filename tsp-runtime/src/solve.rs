use crate::Comparator;
use anyhow::Result;
use tsp_challenges::DistanceMatrix;
use tsp_structs::core::{MatrixInput, SolveReport};
use tsp_utils::load_json_arg;

/// Solves a bare or `{"distance_matrix": ..}` wrapped matrix given as
/// inline json, a `.json` path, or `-` for stdin.
pub fn solve_report(comparator: &Comparator, matrix: &str) -> Result<SolveReport> {
    let rows = load_json_arg::<MatrixInput>(matrix)?.into_rows();
    Ok(solve_matrix(comparator, &DistanceMatrix::new(rows)?))
}

pub fn solve_matrix(comparator: &Comparator, matrix: &DistanceMatrix) -> SolveReport {
    if !matrix.is_symmetric() {
        log::warn!("distance matrix is not symmetric, tours are costed in travel direction");
    }
    SolveReport {
        n: matrix.n(),
        results: comparator.compare(matrix),
    }
}
