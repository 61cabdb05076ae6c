//! Mission — an eco challenge the user can start and complete for points.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::id::MissionId;

/// Seconds on the countdown shown on the mission detail screen.
pub const MISSION_TIMER_SECONDS: u32 = 600;

/// Room the mission detail screen is anchored to.
pub const MISSION_ROOM_NAME: &str = "정보문화관 PC34실";

/// Progress value of a completed mission.
pub const COMPLETED_PROGRESS: f64 = 100.0;

define_label!(
    /// Mission grouping used by the filter tabs.
    MissionCategory {
        All => "all",
        Recycle => "recycle",
        Quiz => "quiz",
        Content => "content",
        Contest => "contest",
    }
);

define_label!(
    /// Lifecycle state: `available → in-progress → completed`.
    MissionStatus {
        Available => "available",
        InProgress => "in-progress",
        Completed => "completed",
    }
);

/// An eco mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    pub emoji: Option<String>,
    pub category: MissionCategory,
    pub points: i64,
    pub progress: f64,
    pub total_steps: i64,
    pub current_step: i64,
    pub status: MissionStatus,
}

impl Mission {
    /// Move the mission into `in-progress`.
    ///
    /// Applied unconditionally: a completed mission can be forced back to
    /// `in-progress`.
    pub fn start(&mut self) {
        self.status = MissionStatus::InProgress;
    }

    /// Mark the mission completed with full progress and return the points
    /// it awards.
    ///
    /// Not guarded against repeats: completing twice awards twice.
    pub fn complete(&mut self) -> i64 {
        self.status = MissionStatus::Completed;
        self.progress = COMPLETED_PROGRESS;
        self.points
    }
}

/// Crowding summary of the room next to the mission room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyRoom {
    pub name: String,
    pub people_count: i64,
    pub status: String,
}

impl Default for NearbyRoom {
    fn default() -> Self {
        Self {
            name: "정보문화관 PC33실".to_string(),
            people_count: 3,
            status: "여유".to_string(),
        }
    }
}

/// Mission plus the context shown on its detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDetail {
    #[serde(flatten)]
    pub mission: Mission,
    pub room_name: String,
    pub devices: Vec<Device>,
    pub timer: u32,
    pub nearby_room: NearbyRoom,
}

impl MissionDetail {
    /// Attach the detail-screen context to a mission.
    #[must_use]
    pub fn new(mission: Mission, devices: Vec<Device>) -> Self {
        Self {
            mission,
            room_name: MISSION_ROOM_NAME.to_string(),
            devices,
            timer: MISSION_TIMER_SECONDS,
            nearby_room: NearbyRoom::default(),
        }
    }
}
