//! Season CSV reading.
//!
//! Each season is one CSV file with a header row and one row per driver
//! per race. Blank lines are skipped, short rows are accepted and invalid
//! UTF-8 is replaced; rows that cannot be decoded are logged and dropped.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::models::{find_season, RaceResult, Season};

use super::{StorageConfig, StorageError};

/// Reader for a season's race results.
pub struct SeasonReader {
    path: PathBuf,
}

impl SeasonReader {
    /// Create a reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a reader for a season's file under the data directory.
    pub fn for_season(config: &StorageConfig, season: &Season) -> Self {
        Self::new(config.season_path(season))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all results from the file.
    pub fn read_all(&self) -> Result<Vec<RaceResult>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::SeasonFileMissing(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let results = read_results(file, &self.path)?;

        info!("Read {} race results from {:?}", results.len(), self.path);
        Ok(results)
    }
}

/// Decode race results from any CSV source.
pub fn read_results<R: Read>(source: R, origin: &Path) -> Result<Vec<RaceResult>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    // Fails on unreadable headers; row errors are handled below.
    let headers = StringRecord::from_byte_record_lossy(reader.byte_headers()?.clone());

    let mut results = Vec::new();
    for (i, row) in reader.byte_records().enumerate() {
        let decoded = row.and_then(|bytes| {
            // Invalid UTF-8 is replaced rather than dropping the row.
            let mut record = StringRecord::from_byte_record_lossy(bytes);
            // Missing trailing cells read as empty.
            while record.len() < headers.len() {
                record.push_field("");
            }
            record.deserialize::<RaceResult>(Some(&headers))
        });

        match decoded {
            Ok(result) => results.push(result),
            Err(e) => {
                // Row 1 is the header.
                warn!("Skipping row {} in {:?}: {}", i + 2, origin, e);
            }
        }
    }

    debug!("Decoded {} rows from {:?}", results.len(), origin);
    Ok(results)
}

/// Load the results for a season by year.
pub fn load_season(
    config: &StorageConfig,
    seasons: &[Season],
    year: &str,
) -> Result<Vec<RaceResult>, StorageError> {
    let season =
        find_season(seasons, year).ok_or_else(|| StorageError::UnknownSeason(year.to_string()))?;
    SeasonReader::for_season(config, season).read_all()
}
