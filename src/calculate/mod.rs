//! Statistics calculation engine.
//!
//! Folds a season's race results into per-driver statistics:
//! - Points, wins, podiums and fastest laps per driver
//! - Average classified finishing position
//! - Championship order by total points

pub mod comparison;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{DriverStats, RaceResult, RankedDriver, SeasonSummary};

/// Running totals for one driver while results are folded in.
struct DriverAccumulator {
    stats: DriverStats,
    position_sum: f64,
    classified: u32,
}

impl DriverAccumulator {
    fn new(first: &RaceResult) -> Self {
        Self {
            stats: DriverStats::new(first.driver.clone(), first.team.clone()),
            position_sum: 0.0,
            classified: 0,
        }
    }

    fn record(&mut self, result: &RaceResult) {
        let stats = &mut self.stats;

        // Last row processed decides the team.
        stats.team.clone_from(&result.team);
        stats.total_points += result.parsed_points();
        stats.races += 1;

        if let Some(position) = result.parsed_position() {
            if position == 1 {
                stats.wins += 1;
            }
            if position <= 3 {
                stats.podiums += 1;
            }
            self.position_sum += position as f64;
            self.classified += 1;
        }

        if result.has_fastest_lap() {
            stats.fastest_laps += 1;
        }
    }

    fn finish(self) -> DriverStats {
        let mut stats = self.stats;
        stats.average_position = if self.classified > 0 {
            self.position_sum / self.classified as f64
        } else {
            0.0
        };
        stats
    }
}

/// Aggregate race results into per-driver statistics, highest points first.
///
/// Never fails: unparseable points count as zero and non-numeric positions
/// are left out of wins, podiums and the average. Drivers level on points
/// keep the order in which they first appear in `results`.
pub fn aggregate(results: &[RaceResult]) -> Vec<DriverStats> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut accumulators: Vec<DriverAccumulator> = Vec::new();

    for result in results {
        let slot = *slots.entry(result.driver.as_str()).or_insert_with(|| {
            accumulators.push(DriverAccumulator::new(result));
            accumulators.len() - 1
        });
        accumulators[slot].record(result);
    }

    let mut stats: Vec<DriverStats> = accumulators
        .into_iter()
        .map(DriverAccumulator::finish)
        .collect();

    // sort_by is stable, so ties stay in first-seen order
    stats.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));

    debug!(
        "Aggregated {} results into {} drivers",
        results.len(),
        stats.len()
    );
    stats
}

/// Attach 1-based ranks to aggregated statistics.
pub fn rank(stats: Vec<DriverStats>) -> Vec<RankedDriver> {
    stats
        .into_iter()
        .enumerate()
        .map(|(i, stats)| RankedDriver {
            rank: i as u32 + 1,
            stats,
        })
        .collect()
}

/// Find a driver by exact name.
pub fn find_driver<'a>(stats: &'a [DriverStats], driver: &str) -> Option<&'a DriverStats> {
    stats.iter().find(|s| s.driver == driver)
}

/// Count drivers, races and rows in a season's results.
///
/// Rows are expected in race order. A race is a run of consecutive rows with
/// the same non-empty track, so a venue visited twice in a season counts
/// twice as long as another race sits between the visits.
pub fn summarize(season: &str, results: &[RaceResult]) -> SeasonSummary {
    let drivers: HashSet<&str> = results.iter().map(|r| r.driver.as_str()).collect();

    let mut races = 0u32;
    let mut current: Option<&str> = None;
    for track in results.iter().map(|r| r.track.trim()).filter(|t| !t.is_empty()) {
        if current != Some(track) {
            races += 1;
            current = Some(track);
        }
    }

    SeasonSummary {
        season: season.to_string(),
        drivers: drivers.len() as u32,
        races,
        results: results.len() as u32,
    }
}
