//! # F1 Stats
//!
//! Season statistics for Formula 1 drivers, derived from per-race result CSVs.
//!
//! ## Architecture
//!
//! - **models**: Race results, driver statistics and the season catalog
//! - **calculate**: Aggregation of results into standings, head-to-head comparison
//! - **storage**: Season CSV loading
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
