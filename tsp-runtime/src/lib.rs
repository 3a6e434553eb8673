//! Runs both exact solvers on one graph under per-method size limits.

mod benchmark;
pub use benchmark::*;
mod comparator;
pub use comparator::*;
mod error;
pub use error::*;
mod solve;
pub use solve::*;
