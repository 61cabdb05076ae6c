//! JSON REST handlers for missions.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use ecocampus_app::ports::Repositories;
use ecocampus_domain::id::MissionId;
use ecocampus_domain::mission::{Mission, MissionDetail};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "all")]
    pub category: String,
}

fn all() -> String {
    "all".to_string()
}

/// Body of the lifecycle endpoints.
#[derive(Debug, Serialize)]
pub struct TransitionBody {
    pub message: &'static str,
    pub mission: Mission,
}

/// `GET /api/missions?category=`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Mission>>, ApiError> {
    let missions = state.mission_service.list_missions(&query.category).await?;
    Ok(Json(missions))
}

/// `GET /api/missions/:id`
pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<MissionDetail>, ApiError> {
    let mission_id = MissionId::parse(&id)?;
    let detail = state.mission_service.get_mission_detail(mission_id).await?;
    Ok(Json(detail))
}

/// `POST /api/missions/:id/start`
pub async fn start<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<TransitionBody>, ApiError> {
    let mission_id = MissionId::parse(&id)?;
    let mission = state.mission_service.start_mission(mission_id).await?;
    Ok(Json(TransitionBody {
        message: "Mission started",
        mission,
    }))
}

/// `POST /api/missions/:id/complete`
pub async fn complete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<TransitionBody>, ApiError> {
    let mission_id = MissionId::parse(&id)?;
    let mission = state.mission_service.complete_mission(mission_id).await?;
    Ok(Json(TransitionBody {
        message: "Mission completed",
        mission,
    }))
}
