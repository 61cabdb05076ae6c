//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use ecocampus_app::ports::Repositories;

use crate::state::AppState;

/// Body of the root endpoint.
#[derive(Debug, Serialize)]
struct ServerStatus {
    message: &'static str,
    status: &'static str,
}

/// Build the top-level axum [`Router`].
///
/// Serves the API under `/api` and a status line at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] for the browser client.
pub fn build<R: Repositories>(state: AppState<R>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<ServerStatus> {
    Json(ServerStatus {
        message: "EcoCampus API Server",
        status: "running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use ecocampus_app::ports::{
        DeviceRepository, MissionRepository, PointsRepository, RoomRepository, StatsRepository,
        UserRepository,
    };
    use ecocampus_domain::device::Device;
    use ecocampus_domain::error::CampusError;
    use ecocampus_domain::id::{DeviceId, ExchangeItemId, MissionId, RoomId, UserId};
    use ecocampus_domain::mission::{Mission, MissionCategory};
    use ecocampus_domain::points::{
        DonateCategory, DonationReceipt, DonationRequest, ExchangeCategory, ExchangeItem,
        ExchangeReceipt, PointSummary, RecentActivity, WeeklyActivity,
    };
    use ecocampus_domain::ranking::RankingEntry;
    use ecocampus_domain::room::Room;
    use ecocampus_domain::stats::{
        CampusStat, CharacterProgress, LocationStat, RankProgress, SavingsStat, StatusCard, Streak,
    };
    use ecocampus_domain::user::{User, UserActivity, UserStat};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Empty store: every lookup misses and every list is empty.
    #[derive(Clone)]
    struct Stub;

    impl DeviceRepository for Stub {
        async fn get_all(&self) -> Result<Vec<Device>, CampusError> {
            Ok(vec![])
        }
        async fn toggle(&self, _id: DeviceId) -> Result<Option<Device>, CampusError> {
            Ok(None)
        }
    }

    impl RoomRepository for Stub {
        async fn get_all(&self) -> Result<Vec<Room>, CampusError> {
            Ok(vec![])
        }
        async fn current_location(&self) -> Result<LocationStat, CampusError> {
            Ok(LocationStat::default())
        }
        async fn select(&self, _id: RoomId) -> Result<Option<(Room, LocationStat)>, CampusError> {
            Ok(None)
        }
    }

    impl MissionRepository for Stub {
        async fn list(
            &self,
            _category: Option<MissionCategory>,
        ) -> Result<Vec<Mission>, CampusError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: MissionId) -> Result<Option<Mission>, CampusError> {
            Ok(None)
        }
        async fn start(&self, _id: MissionId) -> Result<Option<Mission>, CampusError> {
            Ok(None)
        }
        async fn complete(&self, _id: MissionId) -> Result<Option<Mission>, CampusError> {
            Ok(None)
        }
    }

    impl PointsRepository for Stub {
        async fn summary(&self) -> Result<PointSummary, CampusError> {
            Ok(PointSummary::default())
        }
        async fn find_summary(&self) -> Result<Option<PointSummary>, CampusError> {
            Ok(None)
        }
        async fn recent_activities(&self) -> Result<Vec<RecentActivity>, CampusError> {
            Ok(vec![])
        }
        async fn weekly_activities(&self) -> Result<Vec<WeeklyActivity>, CampusError> {
            Ok(vec![])
        }
        async fn exchange_items(
            &self,
            _category: ExchangeCategory,
        ) -> Result<Vec<ExchangeItem>, CampusError> {
            Ok(vec![])
        }
        async fn donate_categories(&self) -> Result<Vec<DonateCategory>, CampusError> {
            Ok(vec![])
        }
        async fn exchange(
            &self,
            _id: ExchangeItemId,
            _category: ExchangeCategory,
        ) -> Result<Option<ExchangeReceipt>, CampusError> {
            Ok(None)
        }
        async fn donate(&self, request: DonationRequest) -> Result<DonationReceipt, CampusError> {
            let mut summary = PointSummary::default();
            summary.donate(request.amount)?;
            Ok(DonationReceipt {
                category: None,
                amount: request.amount,
                remaining_points: summary.current_points,
                total_donated: summary.total_donated,
            })
        }
    }

    impl UserRepository for Stub {
        async fn get_by_id(&self, _id: UserId) -> Result<Option<User>, CampusError> {
            Ok(None)
        }
        async fn stat(&self, _id: UserId) -> Result<UserStat, CampusError> {
            Ok(UserStat::default())
        }
        async fn find_stat(&self, _id: UserId) -> Result<Option<UserStat>, CampusError> {
            Ok(None)
        }
        async fn activities(&self, _id: UserId) -> Result<Vec<UserActivity>, CampusError> {
            Ok(vec![])
        }
        async fn ranking_entries(&self) -> Result<Vec<RankingEntry>, CampusError> {
            Ok(vec![])
        }
    }

    impl StatsRepository for Stub {
        async fn savings(&self) -> Result<SavingsStat, CampusError> {
            Ok(SavingsStat::default())
        }
        async fn character_progress(&self) -> Result<CharacterProgress, CampusError> {
            Ok(CharacterProgress::default())
        }
        async fn find_character_progress(
            &self,
        ) -> Result<Option<CharacterProgress>, CampusError> {
            Ok(None)
        }
        async fn status_cards(&self) -> Result<Vec<StatusCard>, CampusError> {
            Ok(vec![])
        }
        async fn streak(&self) -> Result<Streak, CampusError> {
            Ok(Streak::default())
        }
        async fn rank_progress(&self) -> Result<RankProgress, CampusError> {
            Ok(RankProgress::default())
        }
        async fn campus_stat(&self) -> Result<CampusStat, CampusError> {
            Ok(CampusStat::default())
        }
    }

    struct StubRepos;

    impl Repositories for StubRepos {
        type Devices = Stub;
        type Rooms = Stub;
        type Missions = Stub;
        type Points = Stub;
        type Users = Stub;
        type Stats = Stub;

        fn devices(&self) -> Stub {
            Stub
        }
        fn rooms(&self) -> Stub {
            Stub
        }
        fn missions(&self) -> Stub {
            Stub
        }
        fn points(&self) -> Stub {
            Stub
        }
        fn users(&self) -> Stub {
            Stub
        }
        fn stats(&self) -> Stub {
            Stub
        }
    }

    fn app() -> Router {
        build(AppState::new(&StubRepos, UserId::new(1)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_report_status_when_root_called() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn should_report_healthy_when_health_called() {
        let (status, body) = send(get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "Server is running");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_device_id_not_numeric() {
        let (status, body) = send(with_json("PUT", "/api/devices/abc/toggle", "")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid device id");
    }

    #[tokio::test]
    async fn should_return_not_found_when_device_missing() {
        let (status, body) = send(with_json("PUT", "/api/devices/7/toggle", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Device not found");
    }

    #[tokio::test]
    async fn should_return_not_found_when_mission_missing() {
        let (status, body) = send(with_json("POST", "/api/missions/5/complete", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Mission not found");
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_missing() {
        let (status, _) = send(with_json("PUT", "/api/rooms/3/select", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_item_id_missing() {
        let (status, body) = send(with_json("POST", "/api/points/exchange", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid item id");
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let (status, body) = send(with_json(
            "POST",
            "/api/points/exchange",
            r#"{"itemId": "1", "category": "voucher"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Item not found");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_donation_exceeds_balance() {
        let (status, body) =
            send(with_json("POST", "/api/points/donate", r#"{"amount": 10}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Insufficient points");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_amount_not_a_number() {
        let (status, body) =
            send(with_json("POST", "/api/points/donate", r#"{"amount": "abc"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_when_body_not_json() {
        let (status, body) = send(with_json("POST", "/api/points/exchange", "{itemId")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_accept_fractional_amount_and_category_id() {
        let (status, body) = send(with_json(
            "POST",
            "/api/points/donate",
            r#"{"categoryId": 1.5, "amount": 0.4}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], 0);
        assert_eq!(body["message"], "Donation successful");

        let (status, body) =
            send(with_json("POST", "/api/points/donate", r#"{"amount": 100.5}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Insufficient points");
    }

    #[tokio::test]
    async fn should_serve_empty_profile_when_user_missing() {
        let (status, body) = send(get("/api/user/profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].is_null());
        assert_eq!(body["level"], 1);
        assert_eq!(body["character"], "나무");
    }

    #[tokio::test]
    async fn should_echo_ranking_labels_with_defaults() {
        let (_, body) = send(get("/api/ranking?type=department")).await;
        assert_eq!(body["rankingType"], "department");
        assert_eq!(body["timePeriod"], "daily");
        assert_eq!(body["myRank"]["myRank"], 12);
    }

    #[tokio::test]
    async fn should_serve_default_home_character_when_user_missing() {
        let (_, body) = send(get("/api/home/character")).await;
        assert_eq!(body["level"], 1);
        assert_eq!(body["growthRate"], 0);
    }
}
