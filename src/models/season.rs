//! Season catalog entries.

use serde::{Deserialize, Serialize};

/// A season and the CSV file holding its race results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Season identifier, usually the year (e.g. "2024")
    pub year: String,

    /// File name relative to the data directory
    pub file: String,
}

impl Season {
    /// Create a season using the `<year>_race.csv` naming convention.
    pub fn for_year(year: &str) -> Self {
        Self {
            year: year.to_string(),
            file: format!("{}_race.csv", year),
        }
    }
}

/// Look up a season by year.
pub fn find_season<'a>(seasons: &'a [Season], year: &str) -> Option<&'a Season> {
    seasons.iter().find(|s| s.year == year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_for_year() {
        let season = Season::for_year("2024");
        assert_eq!(season.year, "2024");
        assert_eq!(season.file, "2024_race.csv");
    }

    #[test]
    fn test_find_season() {
        let seasons = vec![Season::for_year("2023"), Season::for_year("2024")];

        assert_eq!(find_season(&seasons, "2024").map(|s| s.file.as_str()), Some("2024_race.csv"));
        assert!(find_season(&seasons, "1999").is_none());
    }
}
