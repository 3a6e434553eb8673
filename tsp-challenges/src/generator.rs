use crate::DistanceMatrix;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct GraphSettings {
    pub num_cities: usize,
    /// inclusive
    pub min_dist: u32,
    /// exclusive
    pub max_dist: u32,
}

const EXAMPLE_GRAPH: [[f64; 6]; 6] = [
    [0.0, 10.0, 15.0, 20.0, 25.0, 30.0],
    [10.0, 0.0, 35.0, 25.0, 20.0, 15.0],
    [15.0, 35.0, 0.0, 30.0, 18.0, 12.0],
    [20.0, 25.0, 30.0, 0.0, 15.0, 28.0],
    [25.0, 20.0, 18.0, 15.0, 0.0, 10.0],
    [30.0, 15.0, 12.0, 28.0, 10.0, 0.0],
];

/// Optimal tour cost of [`example_graph`].
pub const EXAMPLE_GRAPH_OPTIMAL_COST: f64 = 87.0;

/// Fixed 6 city graph used for demos and regression checks.
pub fn example_graph() -> DistanceMatrix {
    DistanceMatrix::from_validated(
        EXAMPLE_GRAPH.len(),
        EXAMPLE_GRAPH.iter().flatten().copied().collect(),
    )
}

impl DistanceMatrix {
    pub fn generate_instance(seed: u64, settings: &GraphSettings) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate_with_rng(&mut rng, settings)
    }

    /// Random symmetric complete graph with a zero diagonal. Every entry
    /// averages (rounding down) two independent draws from
    /// `[min_dist, max_dist)`, one per direction.
    pub fn generate_with_rng<R: Rng>(rng: &mut R, settings: &GraphSettings) -> Result<Self> {
        let n = settings.num_cities;
        if n == 0 {
            return Err(anyhow!("Number of cities must be at least 1"));
        }
        if settings.min_dist >= settings.max_dist {
            return Err(anyhow!(
                "min_dist ({}) must be less than max_dist ({})",
                settings.min_dist,
                settings.max_dist
            ));
        }
        let draws: Vec<u64> = (0..n * n)
            .map(|_| rng.gen_range(settings.min_dist..settings.max_dist) as u64)
            .collect();
        let weights = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| {
                if i == j {
                    0.0
                } else {
                    ((draws[i * n + j] + draws[j * n + i]) / 2) as f64
                }
            })
            .collect();
        log::debug!(
            "generated graph: n={} min_dist={} max_dist={}",
            n,
            settings.min_dist,
            settings.max_dist
        );
        Ok(Self::from_validated(n, weights))
    }
}
