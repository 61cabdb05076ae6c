//! `SQLite` implementation of [`SeedRepository`].

use std::future::Future;

use sqlx::{SqliteConnection, SqlitePool};

use ecocampus_app::demo::DemoData;
use ecocampus_app::ports::SeedRepository;
use ecocampus_domain::error::CampusError;

use crate::error::StorageError;
use crate::pool::begin_write;
use crate::{device_repo, mission_repo, points_repo, room_repo, singleton, stats_repo, user_repo};

const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";

/// Loads [`DemoData`] into an empty database.
#[derive(Clone)]
pub struct SqliteSeedRepository {
    pool: SqlitePool,
}

impl SqliteSeedRepository {
    /// Create a new seeder using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SeedRepository for SqliteSeedRepository {
    fn load_if_empty(
        &self,
        data: &DemoData,
    ) -> impl Future<Output = Result<bool, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let (users,): (i64,) = sqlx::query_as(COUNT_USERS)
                .fetch_one(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            if users > 0 {
                return Ok(false);
            }

            write_users(&mut tx, data).await?;
            write_devices_and_rooms(&mut tx, data).await?;
            write_missions(&mut tx, data).await?;
            write_points(&mut tx, data).await?;
            write_stats(&mut tx, data).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(true)
        }
    }
}

async fn write_users(conn: &mut SqliteConnection, data: &DemoData) -> Result<(), StorageError> {
    let user = &data.user;
    sqlx::query(user_repo::INSERT_USER)
        .bind(user.id.get())
        .bind(&user.name)
        .bind(&user.department)
        .bind(user.level)
        .bind(&user.character)
        .bind(user.points)
        .execute(&mut *conn)
        .await?;

    sqlx::query(user_repo::INSERT_STAT)
        .bind(user.id.get())
        .bind(data.user_stat.points)
        .bind(data.user_stat.completed_missions)
        .bind(data.user_stat.ranking)
        .execute(&mut *conn)
        .await?;

    for activity in &data.user_activities {
        sqlx::query(user_repo::INSERT_ACTIVITY)
            .bind(activity.id.get())
            .bind(user.id.get())
            .bind(&activity.icon)
            .bind(&activity.title)
            .bind(&activity.time_ago)
            .bind(activity.points)
            .bind(activity.kind.as_str())
            .execute(&mut *conn)
            .await?;
    }

    for entry in &data.ranking {
        sqlx::query(user_repo::INSERT_RANKING)
            .bind(entry.id.get())
            .bind(entry.rank)
            .bind(&entry.name)
            .bind(&entry.department)
            .bind(entry.points)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn write_devices_and_rooms(
    conn: &mut SqliteConnection,
    data: &DemoData,
) -> Result<(), StorageError> {
    for device in &data.devices {
        sqlx::query(device_repo::INSERT)
            .bind(device.id.get())
            .bind(&device.name)
            .bind(device.status.as_str())
            .bind(&device.icon)
            .bind(device.power_usage)
            .bind(device.temperature)
            .bind(device.kind.as_str())
            .execute(&mut *conn)
            .await?;
    }

    for room in &data.rooms {
        sqlx::query(room_repo::INSERT)
            .bind(room.id.get())
            .bind(&room.name)
            .bind(room.signal_strength.as_str())
            .bind(room.signal_quality.as_str())
            .bind(room.people_count)
            .bind(room.congestion.as_str())
            .bind(room.is_selected)
            .execute(&mut *conn)
            .await?;
    }

    singleton::save(conn, &data.location).await
}

async fn write_missions(conn: &mut SqliteConnection, data: &DemoData) -> Result<(), StorageError> {
    for mission in &data.missions {
        sqlx::query(mission_repo::INSERT)
            .bind(mission.id.get())
            .bind(&mission.title)
            .bind(&mission.emoji)
            .bind(mission.category.as_str())
            .bind(mission.points)
            .bind(mission.progress)
            .bind(mission.total_steps)
            .bind(mission.current_step)
            .bind(mission.status.as_str())
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn write_points(conn: &mut SqliteConnection, data: &DemoData) -> Result<(), StorageError> {
    singleton::save(conn, &data.point_summary).await?;

    for day in &data.weekly_activities {
        sqlx::query(points_repo::INSERT_WEEKLY)
            .bind(&day.day)
            .bind(day.points)
            .execute(&mut *conn)
            .await?;
    }

    for activity in &data.recent_activities {
        sqlx::query(points_repo::INSERT_RECENT)
            .bind(activity.id.get())
            .bind(&activity.emoji)
            .bind(&activity.title)
            .bind(&activity.date)
            .bind(activity.points)
            .execute(&mut *conn)
            .await?;
    }

    for item in &data.exchange_items {
        sqlx::query(points_repo::INSERT_ITEM)
            .bind(item.id.get())
            .bind(&item.icon)
            .bind(&item.title)
            .bind(&item.discount)
            .bind(item.points)
            .bind(item.category.as_str())
            .execute(&mut *conn)
            .await?;
    }

    for category in &data.donate_categories {
        sqlx::query(points_repo::INSERT_CATEGORY)
            .bind(category.id.get())
            .bind(&category.icon)
            .bind(&category.title)
            .bind(category.points)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn write_stats(conn: &mut SqliteConnection, data: &DemoData) -> Result<(), StorageError> {
    singleton::save(conn, &data.savings).await?;
    singleton::save(conn, &data.character_progress).await?;
    singleton::save(conn, &data.streak).await?;
    singleton::save(conn, &data.rank_progress).await?;
    singleton::save(conn, &data.campus_stat).await?;

    for card in &data.status_cards {
        sqlx::query(stats_repo::INSERT_CARD)
            .bind(&card.icon)
            .bind(&card.label)
            .bind(&card.value)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
