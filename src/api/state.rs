use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::Season;
use crate::storage::StorageConfig;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub seasons: Arc<Vec<Season>>,
    pub default_season: String,
    pub cors_origin: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            storage: Arc::new(StorageConfig::new(config.data_dir.clone())),
            seasons: Arc::new(config.seasons.clone()),
            default_season: config.default_season.clone(),
            cors_origin: config.server.cors_origin.clone(),
        }
    }
}
