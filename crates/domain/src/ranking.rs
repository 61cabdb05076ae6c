//! Ranking — the read-only leaderboard and the caller's place on it.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::points::PointSummary;
use crate::user::{User, UserStat};

/// Rank reported for a user without a stat row.
pub const FALLBACK_RANK: i64 = 12;

/// Leaderboard type used when the client sends none.
pub const DEFAULT_RANKING_TYPE: &str = "individual";

/// Leaderboard period used when the client sends none.
pub const DEFAULT_TIME_PERIOD: &str = "daily";

/// One seeded leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub id: RecordId,
    pub rank: i64,
    pub name: String,
    pub department: String,
    pub points: i64,
}

/// The caller's own line above the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyRank {
    pub my_rank: i64,
    pub my_points: i64,
    pub my_name: String,
    pub my_department: String,
}

impl MyRank {
    /// Compose from whichever rows exist, falling back to [`FALLBACK_RANK`],
    /// zero points and empty names.
    ///
    /// The stat row only counts when its user exists.
    #[must_use]
    pub fn compose(
        user: Option<&User>,
        summary: Option<&PointSummary>,
        stat: Option<&UserStat>,
    ) -> Self {
        Self {
            my_rank: stat
                .filter(|_| user.is_some())
                .map_or(FALLBACK_RANK, |s| s.ranking),
            my_points: summary.map_or(0, |s| s.current_points),
            my_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            my_department: user.map(|u| u.department.clone()).unwrap_or_default(),
        }
    }
}

/// Full ranking response. `ranking_type` and `time_period` are echoed labels
/// and never filter the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub ranking_type: String,
    pub time_period: String,
    pub my_rank: MyRank,
    pub ranking_list: Vec<RankingEntry>,
}
