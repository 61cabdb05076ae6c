//! JSON REST handlers for the acting user.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use ecocampus_app::ports::Repositories;
use ecocampus_domain::user::{EmptyProfile, User, UserActivity, UserStat};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the profile endpoint.
pub enum ProfileResponse {
    Found(Json<User>),
    /// No stored user; the client still gets a renderable profile.
    Missing(Json<EmptyProfile>),
}

impl IntoResponse for ProfileResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Found(json) => json.into_response(),
            Self::Missing(json) => json.into_response(),
        }
    }
}

/// `GET /api/user/profile`
pub async fn profile<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<ProfileResponse, ApiError> {
    let response = match state.user_service.profile(state.user_id).await? {
        Some(user) => ProfileResponse::Found(Json(user)),
        None => ProfileResponse::Missing(Json(EmptyProfile::default())),
    };
    Ok(response)
}

/// `GET /api/user/stats`
pub async fn stats<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<UserStat>, ApiError> {
    Ok(Json(state.user_service.stats(state.user_id).await?))
}

/// `GET /api/user/activities`
pub async fn activities<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<UserActivity>>, ApiError> {
    Ok(Json(state.user_service.activities(state.user_id).await?))
}
