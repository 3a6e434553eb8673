mod json;
pub use json::*;
mod logging;
pub use logging::*;
