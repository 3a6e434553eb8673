//! Exact solvers for the symmetric travelling salesman problem.
//!
//! Neither solver checks the size of its input. Callers bound `n` first,
//! brute force runs in O(n!) and Held-Karp needs O(2^n * n) memory.

use anyhow::Result;
use tsp_challenges::{DistanceMatrix, Tour};
use tsp_structs::core::Method;

pub mod brute_force;
pub mod held_karp;

/// An optimal tour plus the amount of work spent finding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved {
    pub tour: Tour,
    /// Permutations examined (brute force) or dp states defined (Held-Karp).
    pub explored: u64,
}

pub fn solve(method: Method, matrix: &DistanceMatrix) -> Result<Solved> {
    match method {
        Method::BruteForce => brute_force::solve(matrix),
        Method::HeldKarp => held_karp::solve(matrix),
    }
}
