//! JSON REST handlers for the home screen and device switches.

use axum::Json;
use axum::extract::{Path, State};

use ecocampus_app::ports::Repositories;
use ecocampus_domain::device::Device;
use ecocampus_domain::id::DeviceId;
use ecocampus_domain::stats::{CharacterSummary, LocationStat, SavingsStat};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/home/devices`
pub async fn devices<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Device>>, ApiError> {
    let devices = state.device_service.list_devices().await?;
    Ok(Json(devices))
}

/// `GET /api/home/location`
pub async fn location<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<LocationStat>, ApiError> {
    Ok(Json(state.room_service.current_location().await?))
}

/// `GET /api/home/savings`
pub async fn savings<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<SavingsStat>, ApiError> {
    Ok(Json(state.stats_service.savings().await?))
}

/// `GET /api/home/character`
pub async fn character<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<CharacterSummary>, ApiError> {
    Ok(Json(state.stats_service.home_character(state.user_id).await?))
}

/// `PUT /api/devices/:id/toggle`
pub async fn toggle<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Device>, ApiError> {
    let device_id = DeviceId::parse(&id)?;
    let device = state.device_service.toggle_device(device_id).await?;
    Ok(Json(device))
}
