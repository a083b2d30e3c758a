//! Core data models.

mod race_result;
mod season;
mod stats;

pub use race_result::*;
pub use season::*;
pub use stats::*;
