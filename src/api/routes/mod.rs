pub mod comparison;
pub mod seasons;
pub mod standings;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::aggregate;
use crate::models::{DriverStats, RaceResult};
use crate::storage::load_season;

/// Load a season's results and aggregate them.
pub(crate) fn season_stats(
    state: &AppState,
    year: &str,
) -> Result<(Vec<RaceResult>, Vec<DriverStats>), ApiError> {
    let results = load_season(&state.storage, &state.seasons, year)?;
    let stats = aggregate(&results);
    Ok((results, stats))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::state::AppState;
    use crate::models::Season;
    use crate::storage::StorageConfig;

    const HEADER: &str = "Track,Position,No,Driver,Team,Starting Grid,Laps,Time/Retired,Points,Set Fastest Lap,Fastest Lap Time";

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub fn write_season(dir: &Path, year: &str, rows: &[&str]) {
        let mut content = String::from(HEADER);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        std::fs::write(dir.join(format!("{}_race.csv", year)), content).unwrap();
    }

    /// State with 2023 and 2024 configured; only files written by the test exist.
    pub fn setup_test_state(dir: &Path) -> AppState {
        AppState {
            storage: Arc::new(StorageConfig::new(dir.to_path_buf())),
            seasons: Arc::new(vec![Season::for_year("2023"), Season::for_year("2024")]),
            default_season: "2024".to_string(),
            cors_origin: "*".to_string(),
        }
    }

    pub fn write_2024(dir: &Path) {
        write_season(
            dir,
            "2024",
            &[
                "Bahrain,1,1,Max Verstappen,Red Bull Racing Honda RBPT,1,57,1:31:44.742,26,Yes,1:32.608",
                "Bahrain,2,11,Sergio Perez,Red Bull Racing Honda RBPT,5,57,+22.457,18,No,1:34.364",
                "Bahrain,3,55,Carlos Sainz,Ferrari,4,57,+25.110,15,No,1:34.507",
                "Saudi Arabia,1,1,Max Verstappen,Red Bull Racing Honda RBPT,1,50,1:20:43.273,25,No,1:31.773",
                "Saudi Arabia,2,11,Sergio Perez,Red Bull Racing Honda RBPT,3,50,+13.643,18,No,1:32.273",
                "Saudi Arabia,DNF,55,Carlos Sainz,Ferrari,0,0,DNS,,No,",
            ],
        );
    }
}
