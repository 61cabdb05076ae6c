//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use ecocampus_app::ports::Repositories;
use ecocampus_domain::id::RoomId;
use ecocampus_domain::room::Room;
use ecocampus_domain::stats::LocationStat;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of a successful selection.
#[derive(Debug, Serialize)]
pub struct SelectBody {
    pub message: &'static str,
    pub room: Room,
    pub location: LocationStat,
}

/// `GET /api/rooms`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = state.room_service.list_rooms().await?;
    Ok(Json(rooms))
}

/// `PUT /api/rooms/:id/select`
pub async fn select<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<SelectBody>, ApiError> {
    let room_id = RoomId::parse(&id)?;
    let selection = state.room_service.select_room(room_id).await?;
    Ok(Json(SelectBody {
        message: "Room selected",
        room: selection.room,
        location: selection.location,
    }))
}
