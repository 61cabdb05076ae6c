//! User — the student behind the profile, stats and activity screens.

use serde::{Deserialize, Serialize};

use crate::id::{RecordId, UserId};

/// Character shown for a user with no stored profile.
pub const DEFAULT_CHARACTER: &str = "나무";

define_label!(
    /// Direction of a point movement in the activity feed.
    ActivityKind {
        Earn => "earn",
        Spend => "spend",
    }
);

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub department: String,
    pub level: i64,
    pub character: String,
    pub points: i64,
}

/// Profile payload served when the user row is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyProfile {
    pub id: Option<UserId>,
    pub name: String,
    pub department: String,
    pub level: i64,
    pub character: String,
}

impl Default for EmptyProfile {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            department: String::new(),
            level: 1,
            character: DEFAULT_CHARACTER.to_string(),
        }
    }
}

/// Per-user totals. Created lazily with zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStat {
    pub points: i64,
    pub completed_missions: i64,
    pub ranking: i64,
}

/// A line of the user's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub id: RecordId,
    pub icon: String,
    pub title: String,
    pub time_ago: String,
    pub points: i64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}
