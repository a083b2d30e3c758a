//! Derived statistics models.

use serde::{Deserialize, Serialize};

/// Per-driver statistics for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStats {
    /// Driver name, the grouping key
    pub driver: String,

    /// Team from the last result processed for this driver
    pub team: String,

    /// Sum of points across all results
    pub total_points: f64,

    /// Results with position 1
    pub wins: u32,

    /// Results with position 3 or better
    pub podiums: u32,

    /// Number of result rows, classified or not
    pub races: u32,

    /// Mean of numeric positions, 0 when there are none
    pub average_position: f64,

    /// Results with the fastest lap marker set
    pub fastest_laps: u32,
}

impl DriverStats {
    /// Create an empty record for a driver.
    pub fn new(driver: String, team: String) -> Self {
        Self {
            driver,
            team,
            total_points: 0.0,
            wins: 0,
            podiums: 0,
            races: 0,
            average_position: 0.0,
            fastest_laps: 0,
        }
    }

    /// Average position for display, one decimal or "N/A".
    pub fn average_position_label(&self) -> String {
        if self.average_position > 0.0 {
            format!("{:.1}", self.average_position)
        } else {
            "N/A".to_string()
        }
    }
}

/// A driver's statistics together with their championship position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDriver {
    /// 1-based rank in the points order
    pub rank: u32,

    #[serde(flatten)]
    pub stats: DriverStats,
}

/// Totals for a season's input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season: String,

    /// Distinct drivers
    pub drivers: u32,

    /// Runs of consecutive rows with the same non-empty track
    pub races: u32,

    /// Result rows
    pub results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_stats_new_is_zeroed() {
        let stats = DriverStats::new("Lando Norris".to_string(), "McLaren".to_string());

        assert_eq!(stats.total_points, 0.0);
        assert_eq!(stats.races, 0);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.average_position, 0.0);
    }

    #[test]
    fn test_average_position_label() {
        let mut stats = DriverStats::new("A".to_string(), "T".to_string());
        assert_eq!(stats.average_position_label(), "N/A");

        stats.average_position = 4.26;
        assert_eq!(stats.average_position_label(), "4.3");

        stats.average_position = 1.0;
        assert_eq!(stats.average_position_label(), "1.0");
    }

    #[test]
    fn test_driver_stats_serializes_camel_case() {
        let stats = DriverStats::new("A".to_string(), "T".to_string());
        let json = serde_json::to_value(&stats).unwrap();

        assert!(json.get("totalPoints").is_some());
        assert!(json.get("averagePosition").is_some());
        assert!(json.get("fastestLaps").is_some());
        assert!(json.get("total_points").is_none());
    }

    #[test]
    fn test_ranked_driver_flattens_stats() {
        let ranked = RankedDriver {
            rank: 3,
            stats: DriverStats::new("A".to_string(), "T".to_string()),
        };
        let json = serde_json::to_value(&ranked).unwrap();

        assert_eq!(json["rank"], 3);
        assert_eq!(json["driver"], "A");
        assert_eq!(json["team"], "T");
    }
}
