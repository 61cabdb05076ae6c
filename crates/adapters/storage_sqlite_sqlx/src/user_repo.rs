//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ecocampus_app::ports::UserRepository;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::{RecordId, UserId};
use ecocampus_domain::ranking::RankingEntry;
use ecocampus_domain::user::{User, UserActivity, UserStat};

use crate::error::{StorageError, decode_error};
use crate::pool::begin_write;

struct UserRow(User);

impl<'r> FromRow<'r, SqliteRow> for UserRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            department: row.try_get("department")?,
            level: row.try_get("level")?,
            character: row.try_get("character")?,
            points: row.try_get("points")?,
        }))
    }
}

struct StatRow(UserStat);

impl<'r> FromRow<'r, SqliteRow> for StatRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(UserStat {
            points: row.try_get("points")?,
            completed_missions: row.try_get("completed_missions")?,
            ranking: row.try_get("ranking")?,
        }))
    }
}

struct ActivityRow(UserActivity);

impl<'r> FromRow<'r, SqliteRow> for ActivityRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("type")?;

        Ok(Self(UserActivity {
            id: RecordId::new(row.try_get("id")?),
            icon: row.try_get("icon")?,
            title: row.try_get("title")?,
            time_ago: row.try_get("time_ago")?,
            points: row.try_get("points")?,
            kind: kind.parse().map_err(decode_error)?,
        }))
    }
}

struct RankingRow(RankingEntry);

impl<'r> FromRow<'r, SqliteRow> for RankingRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(RankingEntry {
            id: RecordId::new(row.try_get("id")?),
            rank: row.try_get("rank")?,
            name: row.try_get("name")?,
            department: row.try_get("department")?,
            points: row.try_get("points")?,
        }))
    }
}

pub(crate) const INSERT_USER: &str = r"
    INSERT INTO users (id, name, department, level, character, points)
    VALUES (?, ?, ?, ?, ?, ?)
";
pub(crate) const INSERT_STAT: &str = r"
    INSERT INTO user_stats (user_id, points, completed_missions, ranking)
    VALUES (?, ?, ?, ?)
";
pub(crate) const INSERT_ACTIVITY: &str = r"
    INSERT INTO user_activities (id, user_id, icon, title, time_ago, points, type)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
pub(crate) const INSERT_RANKING: &str = r"
    INSERT INTO ranking_entries (id, rank, name, department, points)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_USER: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_STAT: &str =
    "SELECT points, completed_missions, ranking FROM user_stats WHERE user_id = ?";
const INSERT_STAT_IF_MISSING: &str = r"
    INSERT INTO user_stats (user_id, points, completed_missions, ranking)
    VALUES (?, 0, 0, 0)
    ON CONFLICT(user_id) DO NOTHING
";
const SELECT_ACTIVITIES: &str = "SELECT * FROM user_activities WHERE user_id = ? ORDER BY id DESC";
const SELECT_RANKING: &str = "SELECT * FROM ranking_entries ORDER BY rank ASC";

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<UserRow> = sqlx::query_as(SELECT_USER)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|r| r.0))
        }
    }

    fn stat(&self, id: UserId) -> impl Future<Output = Result<UserStat, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;
            sqlx::query(INSERT_STAT_IF_MISSING)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let row: StatRow = sqlx::query_as(SELECT_STAT)
                .bind(id.get())
                .fetch_one(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn find_stat(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<UserStat>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<StatRow> = sqlx::query_as(SELECT_STAT)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|r| r.0))
        }
    }

    fn activities(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Vec<UserActivity>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ActivityRow> = sqlx::query_as(SELECT_ACTIVITIES)
                .bind(id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn ranking_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<RankingEntry>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<RankingRow> = sqlx::query_as(SELECT_RANKING)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
