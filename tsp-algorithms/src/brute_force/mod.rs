//! Exhaustive search over every ordering of the non-start cities.
//!
//! Orderings are visited in ascending lexicographic order and only a
//! strictly cheaper cycle replaces the incumbent, so the earliest optimal
//! ordering is the one returned.

use crate::Solved;
use anyhow::{anyhow, Result};
use tsp_challenges::{DistanceMatrix, Tour};

pub fn solve(matrix: &DistanceMatrix) -> Result<Solved> {
    let n = matrix.n();
    log::debug!("brute force: n={} permutations={}", n, num_permutations(n));

    let mut order: Vec<usize> = (1..n).collect();
    let mut best_order: Option<Vec<usize>> = None;
    let mut best_cost = f64::INFINITY;
    let mut explored: u64 = 0;
    loop {
        explored += 1;
        let cost = cycle_cost(matrix, &order);
        if cost < best_cost {
            best_cost = cost;
            best_order = Some(order.clone());
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    let best_order = best_order.ok_or_else(|| {
        anyhow!(
            "Tour cost overflowed for all {} permutations",
            explored
        )
    })?;
    let mut path = Vec::with_capacity(n + 1);
    path.push(0);
    path.extend(best_order);
    path.push(0);

    log::debug!("brute force: cost={} explored={}", best_cost, explored);
    Ok(Solved {
        tour: Tour {
            cost: best_cost,
            path,
        },
        explored,
    })
}

/// Cost of the cycle `0 -> order.. -> 0`.
fn cycle_cost(matrix: &DistanceMatrix, order: &[usize]) -> f64 {
    let mut cost = 0.0;
    let mut prev = 0;
    for &city in order {
        cost += matrix.dist(prev, city);
        prev = city;
    }
    cost + matrix.dist(prev, 0)
}

/// Rearranges `items` into the next lexicographic permutation.
/// Returns false, leaving `items` untouched, once the last one is reached.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot_value = items[pivot];
    // items[pivot + 1] > pivot_value, so the search always lands after the pivot
    let successor = pivot
        + 1
        + items[pivot + 1..]
            .iter()
            .rposition(|&x| x > pivot_value)
            .unwrap_or(0);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// (n-1)!, saturating.
pub fn num_permutations(n: usize) -> u64 {
    (1..n as u64).fold(1u64, |acc, k| acc.saturating_mul(k))
}
