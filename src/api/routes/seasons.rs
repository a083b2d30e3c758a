use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Serialize)]
pub struct SeasonEntry {
    pub year: String,
    pub is_default: bool,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct SeasonsResponse {
    pub seasons: Vec<SeasonEntry>,
}

pub async fn list_seasons(State(state): State<AppState>) -> Json<SeasonsResponse> {
    let seasons = state
        .seasons
        .iter()
        .map(|s| SeasonEntry {
            year: s.year.clone(),
            is_default: s.year == state.default_season,
            available: state.storage.season_path(s).exists(),
        })
        .collect();

    Json(SeasonsResponse { seasons })
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::{get_json, setup_test_state, write_2024};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_seasons() {
        let tmp = tempfile::tempdir().unwrap();
        write_2024(tmp.path());
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/seasons").await;
        assert_eq!(status, StatusCode::OK);

        let seasons = json["seasons"].as_array().unwrap();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0]["year"], "2023");
        assert_eq!(seasons[0]["is_default"], false);
        assert_eq!(seasons[0]["available"], false);
        assert_eq!(seasons[1]["year"], "2024");
        assert_eq!(seasons[1]["is_default"], true);
        assert_eq!(seasons[1]["available"], true);
    }
}
