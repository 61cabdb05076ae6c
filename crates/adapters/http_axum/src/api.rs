//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod character;
#[allow(clippy::missing_errors_doc)]
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod missions;
#[allow(clippy::missing_errors_doc)]
pub mod points;
#[allow(clippy::missing_errors_doc)]
pub mod ranking;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;
#[allow(clippy::missing_errors_doc)]
pub mod user;

use axum::Router;
use axum::routing::{get, post, put};
use serde::Serialize;

use ecocampus_app::ports::Repositories;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R: Repositories>() -> Router<AppState<R>> {
    Router::new()
        .route("/health", get(health))
        // Home
        .route("/home/devices", get(home::devices::<R>))
        .route("/home/location", get(home::location::<R>))
        .route("/home/savings", get(home::savings::<R>))
        .route("/home/character", get(home::character::<R>))
        .route("/devices/{id}/toggle", put(home::toggle::<R>))
        // Character
        .route("/character/progress", get(character::progress::<R>))
        .route("/character/status", get(character::status::<R>))
        .route("/character/streak", get(character::streak::<R>))
        .route("/rank/progress", get(character::rank_progress::<R>))
        .route("/campus/stats", get(character::campus_stats::<R>))
        // Missions
        .route("/missions", get(missions::list::<R>))
        .route("/missions/{id}", get(missions::get::<R>))
        .route("/missions/{id}/start", post(missions::start::<R>))
        .route("/missions/{id}/complete", post(missions::complete::<R>))
        // Points
        .route("/points", get(points::summary::<R>))
        .route("/points/activities", get(points::activities::<R>))
        .route("/points/weekly", get(points::weekly::<R>))
        .route(
            "/points/exchange",
            get(points::exchange_items::<R>).post(points::exchange::<R>),
        )
        .route(
            "/points/donate/categories",
            get(points::donate_categories::<R>),
        )
        .route("/points/donate", post(points::donate::<R>))
        // User
        .route("/user/profile", get(user::profile::<R>))
        .route("/user/stats", get(user::stats::<R>))
        .route("/user/activities", get(user::activities::<R>))
        .route("/ranking", get(ranking::leaderboard::<R>))
        // Rooms
        .route("/rooms", get(rooms::list::<R>))
        .route("/rooms/{id}/select", put(rooms::select::<R>))
}

/// Body of the health endpoints.
#[derive(Debug, Serialize)]
pub struct Status {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /api/health`
pub async fn health() -> axum::Json<Status> {
    axum::Json(Status {
        status: "healthy",
        message: "Server is running",
    })
}
