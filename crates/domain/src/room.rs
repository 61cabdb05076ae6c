//! Room — a classroom the user can pick as their current location.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;

/// Location shown before any room has been picked.
pub const FALLBACK_LOCATION: &str = "정보문화관 PC34실";

define_label!(
    /// Signal strength grade, best first.
    SignalGrade {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
    }
);

define_label!(
    /// Signal quality bucket.
    SignalQuality {
        Strong => "strong",
        Medium => "medium",
        Weak => "weak",
    }
);

define_label!(
    /// Occupancy label.
    Congestion {
        /// 여유
        Light => "여유",
        /// 보통
        Moderate => "보통",
        /// 혼잡
        Crowded => "혼잡",
    }
);

/// A classroom. At most one room is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub signal_strength: SignalGrade,
    #[serde(rename = "signal")]
    pub signal_quality: SignalQuality,
    pub people_count: i64,
    pub congestion: Congestion,
    #[serde(skip_serializing, default)]
    pub is_selected: bool,
}
