use crate::serializable_struct_with_defaults;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tsp_utils::load_json_arg;

pub const DEFAULT_MAX_BRUTE_FORCE_N: usize = 10;
pub const DEFAULT_MAX_HELD_KARP_N: usize = 20;

serializable_struct_with_defaults! {
    RuntimeConfig {
        comparator: ComparatorConfig,
        generator: GeneratorConfig,
        benchmark: BenchmarkConfig,
    }
}
serializable_struct_with_defaults! {
    ComparatorConfig {
        // 9! = 362880 permutations at the limit
        max_brute_force_n: Option<usize> = DEFAULT_MAX_BRUTE_FORCE_N,
        // 19 * 2^18 dp states at the limit
        max_held_karp_n: Option<usize> = DEFAULT_MAX_HELD_KARP_N,
    }
}
serializable_struct_with_defaults! {
    GeneratorConfig {
        min_cities: Option<usize> = 3,
        max_cities: Option<usize> = 15,
        min_dist: Option<u32> = 1,
        max_dist: Option<u32> = 100,
    }
}
serializable_struct_with_defaults! {
    BenchmarkConfig {
        max_end_n: Option<usize> = 12,
    }
}

impl RuntimeConfig {
    /// Loads from inline json or a `.json` path; `None` yields all defaults.
    pub fn load(arg: Option<&str>) -> Result<Self> {
        match arg {
            Some(arg) => load_json_arg(arg),
            None => Ok(Self::default()),
        }
    }

    /// Command line thresholds take precedence over loaded ones.
    pub fn with_overrides(
        mut self,
        max_brute_force_n: Option<usize>,
        max_held_karp_n: Option<usize>,
    ) -> Self {
        if max_brute_force_n.is_some() {
            self.comparator.max_brute_force_n = max_brute_force_n;
        }
        if max_held_karp_n.is_some() {
            self.comparator.max_held_karp_n = max_held_karp_n;
        }
        self
    }
}

impl ComparatorConfig {
    pub fn new(max_brute_force_n: usize, max_held_karp_n: usize) -> Self {
        Self {
            max_brute_force_n: Some(max_brute_force_n),
            max_held_karp_n: Some(max_held_karp_n),
        }
    }
}
