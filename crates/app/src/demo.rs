//! Canned demo rows loaded into an empty store at startup.

use ecocampus_domain::device::{Device, DeviceKind, DeviceStatus};
use ecocampus_domain::id::{
    DeviceId, DonateCategoryId, ExchangeItemId, MissionId, RecordId, RoomId, UserId,
};
use ecocampus_domain::mission::{Mission, MissionCategory, MissionStatus};
use ecocampus_domain::points::{
    DonateCategory, ExchangeCategory, ExchangeItem, PointSummary, RecentActivity, WeeklyActivity,
};
use ecocampus_domain::ranking::RankingEntry;
use ecocampus_domain::room::{Congestion, Room, SignalGrade, SignalQuality};
use ecocampus_domain::stats::{
    CampusStat, CharacterProgress, LocationStat, RankProgress, SavingsStat, StatusCard, Streak,
};
use ecocampus_domain::user::{ActivityKind, User, UserActivity, UserStat};

/// Every row the seed loader writes. Ids are the row ids to insert with.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub user: User,
    pub devices: Vec<Device>,
    pub location: LocationStat,
    pub savings: SavingsStat,
    pub character_progress: CharacterProgress,
    pub status_cards: Vec<StatusCard>,
    pub streak: Streak,
    pub rank_progress: RankProgress,
    pub campus_stat: CampusStat,
    pub missions: Vec<Mission>,
    pub point_summary: PointSummary,
    pub weekly_activities: Vec<WeeklyActivity>,
    pub recent_activities: Vec<RecentActivity>,
    pub exchange_items: Vec<ExchangeItem>,
    pub donate_categories: Vec<DonateCategory>,
    pub user_stat: UserStat,
    pub user_activities: Vec<UserActivity>,
    pub rooms: Vec<Room>,
    pub ranking: Vec<RankingEntry>,
}

impl DemoData {
    /// The campus demo: one student, two devices, five rooms and a filled
    /// leaderboard.
    #[must_use]
    #[rustfmt::skip]
    pub fn campus() -> Self {
        Self {
            user: User {
                id: UserId::new(1),
                name: "나환경".into(),
                department: "사무행정과".into(),
                level: 2,
                character: "나무".into(),
                points: 850,
            },
            devices: vec![
                Device {
                    id: DeviceId::new(1),
                    name: "냉난방기".into(),
                    status: DeviceStatus::Off,
                    icon: "snow".into(),
                    power_usage: None,
                    temperature: Some(23.5),
                    kind: DeviceKind::Cooling,
                },
                Device {
                    id: DeviceId::new(2),
                    name: "전등".into(),
                    status: DeviceStatus::Off,
                    icon: "bulb".into(),
                    power_usage: Some(1.2),
                    temperature: None,
                    kind: DeviceKind::Light,
                },
            ],
            location: LocationStat {
                current_location: "pc22실".into(),
                total_power_usage: 1.2,
            },
            savings: SavingsStat {
                today_savings: 0.7,
                participated_missions: 2,
                acquired_points: 120,
                department_average: 12,
            },
            character_progress: CharacterProgress {
                current_level: 2,
                next_level: 3,
                progress: 35.0,
                missions_to_next_level: 13,
                character_name: "나무".into(),
                character_emoji: "🌳".into(),
            },
            status_cards: vec![
                card("✅", "미션 완료", "2개"),
                card("🌱", "오늘 성장", "+4% 증가"),
                card("💰", "포인트", "+120P"),
            ],
            streak: Streak {
                days: 3,
                completed_days: vec![1, 2, 3],
                message: "3일 연속 미션 완료했어요!".into(),
            },
            rank_progress: RankProgress {
                current_rank: "새싹 등급".into(),
                next_rank: "잎새 등급".into(),
                current_points: 350,
                points_to_next_rank: 650,
                progress: 35.0,
            },
            campus_stat: CampusStat {
                today_savings: 1204,
                student_participation: 3450,
                waste_rooms: 3,
            },
            missions: vec![
                mission(1, "친환경 스토리", "📖", MissionCategory::Content, 10, (25.0, 4, 1), MissionStatus::InProgress),
                mission(2, "텀블러 사용 인증", "☕", MissionCategory::Recycle, 10, (50.0, 4, 2), MissionStatus::InProgress),
                mission(3, "분리수거 챌린지", "♻️", MissionCategory::Recycle, 10, (25.0, 4, 1), MissionStatus::InProgress),
                mission(4, "에코 마일리지", "🚌", MissionCategory::Content, 10, (0.0, 4, 0), MissionStatus::Available),
                mission(5, "10분 절전 미션", "⚡", MissionCategory::Contest, 50, (0.0, 1, 0), MissionStatus::Available),
            ],
            point_summary: PointSummary {
                current_points: 850,
                weekly_increase: 240,
                used_points: 300,
                total_donated: 300,
            },
            weekly_activities: [("월", 15), ("화", 30), ("수", 45), ("목", 60), ("금", 75)]
                .into_iter()
                .map(|(day, points)| WeeklyActivity {
                    day: day.into(),
                    points,
                })
                .collect(),
            recent_activities: vec![
                recent(1, "🍽️", "절전 미션 성공!", "2025.11.10 09:43", 50),
                recent(2, "🌍", "공모전 미션 성공!", "2025.11.09 14:22", 100),
                recent(3, "⏰", "콘센트 사용 미션 성공!", "2025.11.08 11:15", 20),
                recent(4, "♻️", "재활용 미션 성공!", "2025.11.07 16:30", 20),
            ],
            exchange_items: vec![
                item(1, "🍽️", "교내 식당 할인권", "10% 할인", 1500, ExchangeCategory::Voucher),
                item(2, "☕", "교내 카페 할인권", "15% 할인", 1500, ExchangeCategory::Voucher),
                item(3, "🏪", "교내 편의점 할인권", "10% 할인", 1500, ExchangeCategory::Voucher),
                item(4, "🎁", "교내 마일리지", "10% 할인", 1500, ExchangeCategory::Voucher),
                item(5, "📚", "책 물려받기", "10% 할인", 2000, ExchangeCategory::Voucher),
                item(6, "🛠️", "커스텀 재료 구매", "10% 할인", 1000, ExchangeCategory::Voucher),
                item(7, "☕", "스타벅스 아메리카노", "무료", 2000, ExchangeCategory::Gifticon),
                item(8, "🍔", "맥도날드 햄버거 세트", "무료", 3000, ExchangeCategory::Gifticon),
            ],
            donate_categories: vec![
                donate(1, "📚", "책 물려받기", 700),
                donate(2, "🎓", "장학금 포인트 기부", 3000),
                donate(3, "⏰", "봉사시간 전환", 2500),
            ],
            user_stat: UserStat {
                points: 1250,
                completed_missions: 42,
                ranking: 12,
            },
            user_activities: vec![
                activity(1, "⚡", "절전 미션 성공", "2시간 전", 50, ActivityKind::Earn),
                activity(2, "⚡", "절전 미션 성공", "5시간 전", 30, ActivityKind::Earn),
                activity(3, "🎁", "포인트 기부", "1일 전", 300, ActivityKind::Spend),
            ],
            rooms: vec![
                room(1, "정보문화관 PC34실", (SignalGrade::B, SignalQuality::Strong), 25, Congestion::Moderate, true),
                room(2, "정보문화관 PC33실", (SignalGrade::A, SignalQuality::Strong), 3, Congestion::Light, false),
                room(3, "정보문화관 PC35실", (SignalGrade::C, SignalQuality::Medium), 30, Congestion::Crowded, false),
                room(4, "정보문화관 PC32실", (SignalGrade::B, SignalQuality::Strong), 15, Congestion::Light, false),
                room(5, "정보문화관 PC36실", (SignalGrade::D, SignalQuality::Weak), 20, Congestion::Moderate, false),
            ],
            ranking: [
                ("김환경", "빅데이터과", 3450),
                ("이환경", "치위생과", 3333),
                ("최환경", "아동보육과", 3000),
                ("윤환경", "산업디자인과", 2876),
                ("박환경", "항공과", 2777),
                ("정환경", "시각미디어과", 2456),
                ("강환경", "세무회계과", 2345),
                ("조환경", "간호과", 2234),
                ("신환경", "물리치료과", 2123),
                ("오환경", "사무행정과", 2012),
            ]
            .into_iter()
            .zip(1..)
            .map(|((name, department, points), rank)| RankingEntry {
                id: RecordId::new(rank),
                rank,
                name: name.into(),
                department: department.into(),
                points,
            })
            .collect(),
        }
    }
}

fn card(icon: &str, label: &str, value: &str) -> StatusCard {
    StatusCard {
        icon: icon.into(),
        label: label.into(),
        value: value.into(),
    }
}

fn mission(
    id: i64,
    title: &str,
    emoji: &str,
    category: MissionCategory,
    points: i64,
    (progress, total_steps, current_step): (f64, i64, i64),
    status: MissionStatus,
) -> Mission {
    Mission {
        id: MissionId::new(id),
        title: title.into(),
        emoji: Some(emoji.into()),
        category,
        points,
        progress,
        total_steps,
        current_step,
        status,
    }
}

fn recent(id: i64, emoji: &str, title: &str, date: &str, points: i64) -> RecentActivity {
    RecentActivity {
        id: RecordId::new(id),
        emoji: emoji.into(),
        title: title.into(),
        date: date.into(),
        points,
    }
}

fn item(
    id: i64,
    icon: &str,
    title: &str,
    discount: &str,
    points: i64,
    category: ExchangeCategory,
) -> ExchangeItem {
    ExchangeItem {
        id: ExchangeItemId::new(id),
        icon: icon.into(),
        title: title.into(),
        discount: discount.into(),
        points,
        category,
    }
}

fn donate(id: i64, icon: &str, title: &str, points: i64) -> DonateCategory {
    DonateCategory {
        id: DonateCategoryId::new(id),
        icon: icon.into(),
        title: title.into(),
        points,
    }
}

fn activity(
    id: i64,
    icon: &str,
    title: &str,
    time_ago: &str,
    points: i64,
    kind: ActivityKind,
) -> UserActivity {
    UserActivity {
        id: RecordId::new(id),
        icon: icon.into(),
        title: title.into(),
        time_ago: time_ago.into(),
        points,
        kind,
    }
}

fn room(
    id: i64,
    name: &str,
    (signal_strength, signal_quality): (SignalGrade, SignalQuality),
    people_count: i64,
    congestion: Congestion,
    is_selected: bool,
) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.into(),
        signal_strength,
        signal_quality,
        people_count,
        congestion,
        is_selected,
    }
}
