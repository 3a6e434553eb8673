use crate::MethodError;
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    time::Instant,
};
use tsp_challenges::DistanceMatrix;
use tsp_structs::{
    config::ComparatorConfig,
    core::{Method, TourResult},
};

/// Runs every [`Method`] on the same matrix. A method that is skipped or
/// fails yields an error result and never affects the others.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

impl Comparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Largest number of cities `method` is attempted for.
    pub fn max_n(&self, method: Method) -> usize {
        match method {
            Method::BruteForce => self.config.max_brute_force_n(),
            Method::HeldKarp => self.config.max_held_karp_n(),
        }
    }

    /// One result per method, brute force first.
    pub fn compare(&self, matrix: &DistanceMatrix) -> Vec<TourResult> {
        Method::ALL
            .iter()
            .map(|&method| self.run_method(method, matrix))
            .collect()
    }

    pub fn run_method(&self, method: Method, matrix: &DistanceMatrix) -> TourResult {
        match self.try_run_method(method, matrix) {
            Ok(result) => {
                log::info!(
                    "{}: n={} cost={} time={:.6}s {}={}",
                    method,
                    matrix.n(),
                    result.cost().unwrap_or(f64::NAN),
                    result.time,
                    method.counter_name(),
                    result.explored().unwrap_or_default()
                );
                result
            }
            Err(e) => {
                log::warn!("{}: n={} {}", method, matrix.n(), e);
                TourResult::failed(method, e.to_string())
            }
        }
    }

    pub fn try_run_method(
        &self,
        method: Method,
        matrix: &DistanceMatrix,
    ) -> Result<TourResult, MethodError> {
        let n = matrix.n();
        let max = self.max_n(method);
        if n > max {
            return Err(MethodError::SizeExceeded { method, n, max });
        }

        let start = Instant::now();
        let solved = panic::catch_unwind(AssertUnwindSafe(|| tsp_algorithms::solve(method, matrix)))
            .map_err(|payload| MethodError::ExecutionFailure {
                method,
                message: panic_message(payload.as_ref()),
            })?
            .map_err(|e| MethodError::ExecutionFailure {
                method,
                message: e.to_string(),
            })?;
        let time = start.elapsed().as_secs_f64();

        Ok(TourResult::solved(
            method,
            time,
            solved.tour.cost,
            solved.tour.path,
            solved.explored,
        ))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "solver panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(payload.as_ref()), "owned message");
        let payload: Box<dyn Any + Send> = Box::new(17u8);
        assert_eq!(panic_message(payload.as_ref()), "solver panicked");
    }
}
