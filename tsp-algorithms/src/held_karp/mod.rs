//! Bellman-Held-Karp dynamic programming over subsets of the non-start cities.
//!
//! A subset is a bitmask where bit `i` stands for city `i + 1`. The table is
//! dense: for every mask and every city one cost and one predecessor entry.

use crate::Solved;
use anyhow::{anyhow, Result};
use tsp_challenges::{DistanceMatrix, Tour};

/// Widest subset a mask may describe, i.e. at most this many non-start cities.
pub const MAX_SUBSET_BITS: usize = 31;

const NO_PRED: u8 = u8::MAX;

pub fn solve(matrix: &DistanceMatrix) -> Result<Solved> {
    let n = matrix.n();
    if n <= 1 {
        // no transitions exist, so there is nothing to reconstruct
        return Ok(Solved {
            tour: Tour::trivial(matrix),
            explored: 0,
        });
    }
    let m = n - 1;
    if m > MAX_SUBSET_BITS {
        return Err(anyhow!(
            "Held-Karp supports at most {} cities, got {}",
            MAX_SUBSET_BITS + 1,
            n
        ));
    }
    log::debug!("held-karp: n={} states={}", n, num_states(n));

    let mut table = DpTable::new(m)?;
    let explored = table.fill(matrix);
    let (cost, last_city) = table.close(matrix)?;
    let path = table.reconstruct(last_city)?;

    log::debug!("held-karp: cost={} states_computed={}", cost, explored);
    Ok(Solved {
        tour: Tour { cost, path },
        explored,
    })
}

/// Number of (subset, city) states for `n` cities: (n-1) * 2^(n-2).
pub fn num_states(n: usize) -> u64 {
    match n {
        0 | 1 => 0,
        _ => (n as u64 - 1).saturating_mul(1u64.checked_shl(n as u32 - 2).unwrap_or(u64::MAX)),
    }
}

struct DpTable {
    m: usize,
    cost: Vec<f64>,
    pred: Vec<u8>,
}

impl DpTable {
    fn new(m: usize) -> Result<Self> {
        let len = (1usize << m)
            .checked_mul(m)
            .ok_or_else(|| anyhow!("Held-Karp table size overflows for {} cities", m + 1))?;
        let mut cost = Vec::new();
        cost.try_reserve_exact(len)
            .map_err(|e| anyhow!("Failed to allocate {} dp states: {}", len, e))?;
        cost.resize(len, f64::INFINITY);
        let mut pred = Vec::new();
        pred.try_reserve_exact(len)
            .map_err(|e| anyhow!("Failed to allocate {} dp states: {}", len, e))?;
        pred.resize(len, NO_PRED);
        Ok(Self { m, cost, pred })
    }

    #[inline]
    fn index(&self, mask: usize, city: usize) -> usize {
        mask * self.m + (city - 1)
    }

    fn full_mask(&self) -> usize {
        (1 << self.m) - 1
    }

    fn is_defined(&self, mask: usize, city: usize) -> bool {
        self.pred[self.index(mask, city)] != NO_PRED
    }

    /// Computes every state in increasing subset size, returning how many
    /// states ended up defined.
    fn fill(&mut self, matrix: &DistanceMatrix) -> u64 {
        let mut states = 0u64;
        for city in 1..=self.m {
            let idx = self.index(bit(city), city);
            self.cost[idx] = matrix.dist(0, city);
            self.pred[idx] = 0;
            states += 1;
        }

        for size in 2..=self.m {
            for mask in subsets_of_size(self.m, size) {
                for city in cities_in(mask) {
                    let prev_mask = mask & !bit(city);
                    let mut best_cost = f64::INFINITY;
                    let mut best_pred = NO_PRED;
                    for prev in cities_in(prev_mask) {
                        if !self.is_defined(prev_mask, prev) {
                            continue;
                        }
                        let cost = self.cost[self.index(prev_mask, prev)] + matrix.dist(prev, city);
                        if cost < best_cost {
                            best_cost = cost;
                            best_pred = prev as u8;
                        }
                    }
                    if best_pred != NO_PRED {
                        let idx = self.index(mask, city);
                        self.cost[idx] = best_cost;
                        self.pred[idx] = best_pred;
                        states += 1;
                    }
                }
            }
        }
        states
    }

    /// Closes the cheapest full path back to city 0.
    fn close(&self, matrix: &DistanceMatrix) -> Result<(f64, usize)> {
        let full = self.full_mask();
        let mut best: Option<(f64, usize)> = None;
        for city in 1..=self.m {
            if !self.is_defined(full, city) {
                continue;
            }
            let cost = self.cost[self.index(full, city)] + matrix.dist(city, 0);
            if cost < best.map_or(f64::INFINITY, |(best_cost, _)| best_cost) {
                best = Some((cost, city));
            }
        }
        best.ok_or_else(|| anyhow!("No finite tour found, tour cost overflowed"))
    }

    /// Walks the predecessor table back from `last_city`.
    fn reconstruct(&self, last_city: usize) -> Result<Vec<usize>> {
        let mut path = Vec::with_capacity(self.m + 2);
        let mut mask = self.full_mask();
        let mut city = last_city;
        while mask != 0 {
            if city == 0 || mask & bit(city) == 0 {
                return Err(anyhow!(
                    "Predecessor table is inconsistent: city {} not in subset {:#b}",
                    city,
                    mask
                ));
            }
            path.push(city);
            let prev = self.pred[self.index(mask, city)];
            if prev == NO_PRED {
                return Err(anyhow!(
                    "Predecessor table has no entry for city {} in subset {:#b}",
                    city,
                    mask
                ));
            }
            mask &= !bit(city);
            city = prev as usize;
        }
        if city != 0 {
            return Err(anyhow!(
                "Predecessor walk ended at city {} instead of the start city",
                city
            ));
        }
        path.push(0);
        path.reverse();
        path.push(0);
        Ok(path)
    }
}

#[inline]
fn bit(city: usize) -> usize {
    1 << (city - 1)
}

/// Cities of `mask`, ascending.
fn cities_in(mask: usize) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            None
        } else {
            let city = rest.trailing_zeros() as usize + 1;
            rest &= rest - 1;
            Some(city)
        }
    })
}

/// All masks over `m` bits with exactly `size` bits set, ascending (Gosper's hack).
fn subsets_of_size(m: usize, size: usize) -> impl Iterator<Item = usize> {
    let limit = 1usize << m;
    let first = (1usize << size) - 1;
    std::iter::successors((size <= m).then_some(first), move |&s| {
        let lowest = s & s.wrapping_neg();
        let ripple = s + lowest;
        let next = (((ripple ^ s) >> 2) / lowest) | ripple;
        (next < limit).then_some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_in() {
        assert_eq!(cities_in(0b1011).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(cities_in(0).count(), 0);
    }

    #[test]
    fn test_subsets_of_size() {
        assert_eq!(
            subsets_of_size(4, 2).collect::<Vec<_>>(),
            vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]
        );
        assert_eq!(subsets_of_size(3, 3).collect::<Vec<_>>(), vec![0b111]);
        assert_eq!(subsets_of_size(5, 3).count(), 10);
    }

    #[test]
    fn test_num_states() {
        assert_eq!(num_states(1), 0);
        assert_eq!(num_states(2), 1);
        assert_eq!(num_states(3), 4);
        assert_eq!(num_states(6), 80);
    }

    #[test]
    fn test_reconstruct_rejects_missing_predecessor() {
        let table = DpTable::new(2).unwrap();
        assert!(table.reconstruct(1).is_err());
    }
}
