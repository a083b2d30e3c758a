//! Per-race result row.

use serde::{Deserialize, Serialize};

/// Marker value in the `Set Fastest Lap` column for the fastest lap holder.
pub const FASTEST_LAP_MARKER: &str = "Yes";

/// One driver's result in one race, as decoded from a season CSV.
///
/// All fields are kept as text. Numeric columns are parsed on demand so
/// that retirement codes and blank cells survive decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "Track", default)]
    pub track: String,

    /// Finishing position, or a code such as "NC" / "DQ"
    #[serde(rename = "Position", default)]
    pub position: String,

    /// Car number
    #[serde(rename = "No", default)]
    pub number: String,

    #[serde(rename = "Driver", default)]
    pub driver: String,

    #[serde(rename = "Team", default)]
    pub team: String,

    #[serde(rename = "Starting Grid", default)]
    pub starting_grid: String,

    #[serde(rename = "Laps", default)]
    pub laps: String,

    #[serde(rename = "Time/Retired", default)]
    pub time_or_retired: String,

    #[serde(rename = "Points", default)]
    pub points: String,

    #[serde(rename = "Set Fastest Lap", default)]
    pub set_fastest_lap: String,

    #[serde(rename = "Fastest Lap Time", default)]
    pub fastest_lap_time: String,
}

impl RaceResult {
    /// Create a result with the fields the aggregator reads.
    pub fn new(driver: &str, team: &str, position: &str, points: &str) -> Self {
        Self {
            driver: driver.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            points: points.to_string(),
            ..Default::default()
        }
    }

    /// Builder method to set the track.
    pub fn with_track(mut self, track: &str) -> Self {
        self.track = track.to_string();
        self
    }

    /// Builder method to set the fastest lap marker.
    pub fn with_fastest_lap(mut self, marker: &str) -> Self {
        self.set_fastest_lap = marker.to_string();
        self
    }

    /// Finishing position from the leading integer of the cell.
    ///
    /// Trailing text is ignored, so "1.0" reads as 1. Zero and negative
    /// values are returned as-is; cells without leading digits give `None`.
    pub fn parsed_position(&self) -> Option<i64> {
        leading_integer(&self.position)
    }

    /// Points from the leading decimal of the cell, zero when there is none.
    ///
    /// "25abc" reads as 25. Infinite values count as zero.
    pub fn parsed_points(&self) -> f64 {
        match leading_decimal(&self.points) {
            Some(p) if p.is_finite() => p,
            _ => 0.0,
        }
    }

    /// Whether this driver set the fastest lap of the race.
    pub fn has_fastest_lap(&self) -> bool {
        self.set_fastest_lap == FASTEST_LAP_MARKER
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Optional sign followed by decimal digits, or hex digits after "0x".
fn leading_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Only overflow can fail here; saturate.
    let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Longest prefix of the form `[+-]digits[.digits][e[+-]digits]`.
fn leading_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}
