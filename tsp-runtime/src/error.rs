use thiserror::Error;
use tsp_structs::core::Method;

/// Why a method produced no tour. Always local to that method.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MethodError {
    #[error("Graph too large for {} (n={n} > {max})", workload(.method))]
    SizeExceeded { method: Method, n: usize, max: usize },
    #[error("{message}")]
    ExecutionFailure { method: Method, message: String },
}

impl MethodError {
    pub fn method(&self) -> Method {
        match self {
            MethodError::SizeExceeded { method, .. } => *method,
            MethodError::ExecutionFailure { method, .. } => *method,
        }
    }
}

fn workload(method: &Method) -> &'static str {
    match method {
        Method::BruteForce => "brute force",
        Method::HeldKarp => "dynamic programming",
    }
}
