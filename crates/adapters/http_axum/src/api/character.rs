//! JSON REST handlers for the character screen and its summary cards.

use axum::Json;
use axum::extract::State;

use ecocampus_app::ports::Repositories;
use ecocampus_domain::stats::{CampusStat, CharacterProgress, RankProgress, StatusCard, Streak};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/character/progress`
pub async fn progress<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<CharacterProgress>, ApiError> {
    Ok(Json(state.stats_service.character_progress().await?))
}

/// `GET /api/character/status`
pub async fn status<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<StatusCard>>, ApiError> {
    Ok(Json(state.stats_service.status_cards().await?))
}

/// `GET /api/character/streak`
pub async fn streak<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Streak>, ApiError> {
    Ok(Json(state.stats_service.streak().await?))
}

/// `GET /api/rank/progress`
pub async fn rank_progress<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<RankProgress>, ApiError> {
    Ok(Json(state.stats_service.rank_progress().await?))
}

/// `GET /api/campus/stats`
pub async fn campus_stats<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<CampusStat>, ApiError> {
    Ok(Json(state.stats_service.campus_stat().await?))
}
