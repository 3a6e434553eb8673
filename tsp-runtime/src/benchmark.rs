use crate::Comparator;
use anyhow::{anyhow, Result};
use tsp_challenges::{DistanceMatrix, GraphSettings};
use tsp_structs::{
    config::{BenchmarkConfig, GeneratorConfig},
    core::{BenchmarkReport, BenchmarkRow},
};

/// Random graph with `num_cities` cities, bounded by the generator limits.
pub fn generate_graph(
    config: &GeneratorConfig,
    num_cities: usize,
    seed: u64,
) -> Result<DistanceMatrix> {
    if num_cities < config.min_cities() {
        return Err(anyhow!(
            "n must be at least {}, got {}",
            config.min_cities(),
            num_cities
        ));
    }
    if num_cities > config.max_cities() {
        return Err(anyhow!(
            "n must be at most {} for performance reasons, got {}",
            config.max_cities(),
            num_cities
        ));
    }
    DistanceMatrix::generate_instance(seed, &graph_settings(config, num_cities))
}

fn graph_settings(config: &GeneratorConfig, num_cities: usize) -> GraphSettings {
    GraphSettings {
        num_cities,
        min_dist: config.min_dist(),
        max_dist: config.max_dist(),
    }
}

/// Compares both methods on one random graph per size in `start_n..=end_n`.
/// The graph of the i-th size is generated from `seed + i`.
pub fn run_benchmark(
    comparator: &Comparator,
    generator: &GeneratorConfig,
    limits: &BenchmarkConfig,
    start_n: usize,
    end_n: usize,
    seed: u64,
) -> Result<BenchmarkReport> {
    if end_n > limits.max_end_n() {
        return Err(anyhow!(
            "end_n must be at most {} for performance reasons, got {}",
            limits.max_end_n(),
            end_n
        ));
    }
    if start_n == 0 || start_n > end_n {
        return Err(anyhow!(
            "start_n must be between 1 and end_n ({}), got {}",
            end_n,
            start_n
        ));
    }

    let mut results = Vec::with_capacity(end_n - start_n + 1);
    for (i, n) in (start_n..=end_n).enumerate() {
        let matrix = DistanceMatrix::generate_instance(
            seed.wrapping_add(i as u64),
            &graph_settings(generator, n),
        )?;
        log::info!("benchmark: n={}", n);
        results.push(BenchmarkRow {
            n,
            methods: comparator.compare(&matrix),
        });
    }
    Ok(BenchmarkReport { results })
}
