//! JSON REST handler for the leaderboard.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use ecocampus_app::ports::Repositories;
use ecocampus_domain::ranking::Leaderboard;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the ranking endpoint. Both values are echoed labels.
#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    #[serde(rename = "type")]
    pub ranking_type: Option<String>,
    pub period: Option<String>,
}

/// `GET /api/ranking?type=&period=`
pub async fn leaderboard<R: Repositories>(
    State(state): State<AppState<R>>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Leaderboard>, ApiError> {
    let board = state
        .ranking_service
        .leaderboard(state.user_id, query.ranking_type, query.period)
        .await?;
    Ok(Json(board))
}
