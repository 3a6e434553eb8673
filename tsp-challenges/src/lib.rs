//! Symmetric travelling salesman instances on a complete graph.
//!
//! City `0` is the fixed start and end of every tour.

mod generator;
pub use generator::*;
mod matrix;
pub use matrix::*;
mod tour;
pub use tour::*;
