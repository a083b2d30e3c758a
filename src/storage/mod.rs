//! Season data loading.
//!
//! Race results live as one CSV file per season under the data directory.
//! Nothing is written back; every read is a full reload of the file.

mod season_csv;

pub use season_csv::*;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Season;

/// Errors that can occur while loading season data.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Season file not found: {0}")]
    SeasonFileMissing(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of a season's CSV file.
    pub fn season_path(&self, season: &Season) -> PathBuf {
        self.data_dir.join(&season.file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(
            config.season_path(&Season::for_year("2024")),
            PathBuf::from("/data/2024_race.csv")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
