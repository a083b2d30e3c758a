use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::comparison::{compare, default_pair, HeadToHead};

use super::season_stats;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub driver1: Option<String>,
    pub driver2: Option<String>,
}

/// Compare two drivers; missing names fall back to the top two in the standings.
pub async fn head_to_head(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(params): Query<CompareParams>,
) -> Result<Json<HeadToHead>, ApiError> {
    let (_, stats) = season_stats(&state, &year)?;
    let (top1, top2) = default_pair(&stats);

    let driver1 = params.driver1.as_deref().or(top1);
    let driver2 = params.driver2.as_deref().or(top2);

    match (driver1, driver2) {
        (Some(d1), Some(d2)) => Ok(Json(compare(&stats, d1, d2)?)),
        _ => Err(ApiError::BadRequest(format!(
            "Season {} has fewer than two drivers to compare",
            year
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::{
        get_json, setup_test_state, write_2024, write_season,
    };
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_head_to_head_defaults_to_top_two() {
        let tmp = tempfile::tempdir().unwrap();
        write_2024(tmp.path());
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/seasons/2024/compare").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["driver1"]["driver"], "Max Verstappen");
        assert_eq!(json["driver2"]["driver"], "Sergio Perez");

        let metrics = json["metrics"].as_array().unwrap();
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics[0]["metric"], "Points");
        assert_eq!(metrics[0]["left"], 51.0);
        assert_eq!(metrics[0]["right"], 36.0);
        assert_eq!(json["average_position"][0], 1.0);
        assert_eq!(json["average_position"][1], 2.0);
    }

    #[tokio::test]
    async fn test_head_to_head_named_drivers() {
        let tmp = tempfile::tempdir().unwrap();
        write_2024(tmp.path());
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(
            app,
            "/api/seasons/2024/compare?driver1=Carlos%20Sainz&driver2=Max%20Verstappen",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["driver1"]["driver"], "Carlos Sainz");
        assert_eq!(json["metrics"][2]["metric"], "Podiums");
        assert_eq!(json["metrics"][2]["left"], 1.0);
        assert_eq!(json["metrics"][2]["right"], 2.0);
    }

    #[tokio::test]
    async fn test_head_to_head_unknown_driver() {
        let tmp = tempfile::tempdir().unwrap();
        write_2024(tmp.path());
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) =
            get_json(app, "/api/seasons/2024/compare?driver1=Nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_head_to_head_single_driver_season() {
        let tmp = tempfile::tempdir().unwrap();
        write_season(
            tmp.path(),
            "2023",
            &["Bahrain,1,1,Max Verstappen,Red Bull,1,57,1:33:56.736,25,No,1:36.236"],
        );
        let app = build_router(setup_test_state(tmp.path()));

        let (status, json) = get_json(app, "/api/seasons/2023/compare").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }
}
