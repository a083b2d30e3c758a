use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{rank, summarize};
use crate::models::{RankedDriver, SeasonSummary};

use super::season_stats;

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub summary: SeasonSummary,
    pub drivers: Vec<RankedDriver>,
}

pub async fn season_standings(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let (results, stats) = season_stats(&state, &year)?;

    Ok(Json(StandingsResponse {
        summary: summarize(&year, &results),
        drivers: rank(stats),
    }))
}

pub async fn driver_detail(
    State(state): State<AppState>,
    Path((year, driver)): Path<(String, String)>,
) -> Result<Json<RankedDriver>, ApiError> {
    let (_, stats) = season_stats(&state, &year)?;

    rank(stats)
        .into_iter()
        .find(|r| r.stats.driver == driver)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Driver {} in season {}", driver, year)))
}
