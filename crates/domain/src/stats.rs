//! Summary rows behind the home, character and mission screens.
//!
//! Most of these are singletons: the store holds exactly one row of each and
//! creates it from the type's [`Default`] on first access.

use serde::{Deserialize, Serialize};

/// Savings credited when a device is switched off.
pub const SWITCH_OFF_SAVINGS: f64 = 0.1;

/// Character progress gained per completed mission.
pub const PROGRESS_PER_MISSION: f64 = 2.0;

/// Upper bound of any percentage progress.
pub const MAX_PROGRESS: f64 = 100.0;

/// Current location and the summed power draw of its devices. Singleton row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStat {
    pub current_location: String,
    pub total_power_usage: f64,
}

/// Energy saved and missions joined. Singleton row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsStat {
    pub today_savings: f64,
    pub participated_missions: i64,
    pub acquired_points: i64,
    pub department_average: i64,
}

impl SavingsStat {
    /// Record that a device was switched off, earning `points`.
    pub fn record_switch_off(&mut self, points: i64) {
        self.today_savings += SWITCH_OFF_SAVINGS;
        self.acquired_points += points;
    }

    /// Record a completed mission worth `points`.
    pub fn record_mission(&mut self, points: i64) {
        self.participated_missions += 1;
        self.acquired_points += points;
    }
}

/// Character growth toward the next level. Singleton row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProgress {
    pub current_level: i64,
    pub next_level: i64,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub missions_to_next_level: i64,
    pub character_name: String,
    pub character_emoji: String,
}

impl Default for CharacterProgress {
    fn default() -> Self {
        Self {
            current_level: 1,
            next_level: 2,
            progress: 0.0,
            missions_to_next_level: 0,
            character_name: "나무".to_string(),
            character_emoji: "🌳".to_string(),
        }
    }
}

impl CharacterProgress {
    /// Advance after a completed mission, clamping progress at 100 and the
    /// remaining mission count at 0.
    pub fn record_mission(&mut self) {
        self.progress = (self.progress + PROGRESS_PER_MISSION).min(MAX_PROGRESS);
        self.missions_to_next_level = (self.missions_to_next_level - 1).max(0);
    }

    /// Whole-percent growth rate shown on the home screen.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn growth_rate(&self) -> i64 {
        self.progress.trunc() as i64
    }
}

/// Character card on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub level: i64,
    pub growth_rate: i64,
}

impl Default for CharacterSummary {
    fn default() -> Self {
        Self {
            level: 1,
            growth_rate: 0,
        }
    }
}

/// One tile on the character screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCard {
    pub icon: String,
    pub label: String,
    pub value: String,
}

/// Consecutive days with a completed mission. Singleton row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub days: i64,
    pub completed_days: Vec<u32>,
    pub message: String,
}

/// Rank tier progress. Singleton row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankProgress {
    pub current_rank: String,
    pub next_rank: String,
    pub current_points: i64,
    pub points_to_next_rank: i64,
    pub progress: f64,
}

impl Default for RankProgress {
    fn default() -> Self {
        Self {
            current_rank: "새싹 등급".to_string(),
            next_rank: "잎새 등급".to_string(),
            current_points: 0,
            points_to_next_rank: 1000,
            progress: 0.0,
        }
    }
}

/// Campus-wide participation figures. Singleton row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusStat {
    pub today_savings: i64,
    pub student_participation: i64,
    pub waste_rooms: i64,
}

impl Default for CampusStat {
    fn default() -> Self {
        Self {
            today_savings: 1204,
            student_participation: 3450,
            waste_rooms: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_progress_at_one_hundred() {
        let mut cp = CharacterProgress {
            progress: 99.0,
            missions_to_next_level: 3,
            ..CharacterProgress::default()
        };
        cp.record_mission();
        assert!((cp.progress - 100.0).abs() < f64::EPSILON);
        cp.record_mission();
        assert!((cp.progress - 100.0).abs() < f64::EPSILON);
        assert_eq!(cp.missions_to_next_level, 1);
    }

    #[test]
    fn should_clamp_missions_to_next_level_at_zero() {
        let mut cp = CharacterProgress::default();
        cp.record_mission();
        assert_eq!(cp.missions_to_next_level, 0);
        assert!((cp.progress - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_truncate_growth_rate() {
        let cp = CharacterProgress {
            progress: 37.9,
            ..CharacterProgress::default()
        };
        assert_eq!(cp.growth_rate(), 37);
    }

    #[test]
    fn should_credit_savings_when_device_switched_off() {
        let mut savings = SavingsStat::default();
        savings.record_switch_off(10);
        assert!((savings.today_savings - 0.1).abs() < 1e-9);
        assert_eq!(savings.acquired_points, 10);
        assert_eq!(savings.participated_missions, 0);
    }

    #[test]
    fn should_count_completed_mission() {
        let mut savings = SavingsStat::default();
        savings.record_mission(50);
        assert_eq!(savings.participated_missions, 1);
        assert_eq!(savings.acquired_points, 50);
    }

    #[test]
    fn should_serialize_streak_days_as_array() {
        let streak = Streak {
            days: 3,
            completed_days: vec![1, 2, 3],
            message: "3일 연속 미션 완료했어요!".to_string(),
        };
        let json = serde_json::to_value(streak).unwrap();
        assert_eq!(json["completedDays"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn should_default_rank_progress_to_first_tier() {
        let rp = RankProgress::default();
        assert_eq!(rp.current_rank, "새싹 등급");
        assert_eq!(rp.points_to_next_rank, 1000);
    }
}
