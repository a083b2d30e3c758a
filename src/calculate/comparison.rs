//! Head-to-head driver comparison.

use serde::Serialize;
use thiserror::Error;

use crate::models::DriverStats;

use super::find_driver;

/// Comparison errors.
#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("Unknown driver: {0}")]
    UnknownDriver(String),
}

/// A metric shown side by side for two drivers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: String,
    pub left: f64,
    pub right: f64,
}

impl MetricComparison {
    fn new(metric: &str, left: f64, right: f64) -> Self {
        Self {
            metric: metric.to_string(),
            left,
            right,
        }
    }
}

/// Two drivers' statistics with their compared metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub driver1: DriverStats,
    pub driver2: DriverStats,

    /// Points, wins, podiums and fastest laps, in that order
    pub metrics: Vec<MetricComparison>,

    /// Average finishing position of driver1 and driver2
    pub average_position: (f64, f64),
}

/// Compare two drivers picked from aggregated statistics.
pub fn compare(
    stats: &[DriverStats],
    driver1: &str,
    driver2: &str,
) -> Result<HeadToHead, ComparisonError> {
    let d1 = find_driver(stats, driver1)
        .ok_or_else(|| ComparisonError::UnknownDriver(driver1.to_string()))?;
    let d2 = find_driver(stats, driver2)
        .ok_or_else(|| ComparisonError::UnknownDriver(driver2.to_string()))?;

    let metrics = vec![
        MetricComparison::new("Points", d1.total_points, d2.total_points),
        MetricComparison::new("Wins", d1.wins as f64, d2.wins as f64),
        MetricComparison::new("Podiums", d1.podiums as f64, d2.podiums as f64),
        MetricComparison::new("Fastest Laps", d1.fastest_laps as f64, d2.fastest_laps as f64),
    ];

    Ok(HeadToHead {
        driver1: d1.clone(),
        driver2: d2.clone(),
        metrics,
        average_position: (d1.average_position, d2.average_position),
    })
}

/// The drivers preselected for comparison: the top two in the standings.
pub fn default_pair(stats: &[DriverStats]) -> (Option<&str>, Option<&str>) {
    (
        stats.first().map(|s| s.driver.as_str()),
        stats.get(1).map(|s| s.driver.as_str()),
    )
}
