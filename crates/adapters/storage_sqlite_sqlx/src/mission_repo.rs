//! `SQLite` implementation of [`MissionRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use ecocampus_app::ports::MissionRepository;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::MissionId;
use ecocampus_domain::mission::{Mission, MissionCategory};
use ecocampus_domain::points::PointSummary;
use ecocampus_domain::stats::{CharacterProgress, SavingsStat};

use crate::error::{StorageError, decode_error};
use crate::pool::begin_write;
use crate::singleton;

/// Wrapper for converting database rows into domain [`Mission`].
struct Wrapper(Mission);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Mission> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let category: String = row.try_get("category")?;
        let status: String = row.try_get("status")?;

        Ok(Self(Mission {
            id: MissionId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            emoji: row.try_get("emoji")?,
            category: category.parse().map_err(decode_error)?,
            points: row.try_get("points")?,
            progress: row.try_get("progress")?,
            total_steps: row.try_get("total_steps")?,
            current_step: row.try_get("current_step")?,
            status: status.parse().map_err(decode_error)?,
        }))
    }
}

pub(crate) const INSERT: &str = r"
    INSERT INTO missions
        (id, title, emoji, category, points, progress, total_steps, current_step, status)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_ALL: &str = "SELECT * FROM missions ORDER BY id";
const SELECT_BY_CATEGORY: &str = "SELECT * FROM missions WHERE category = ? ORDER BY id";
const SELECT_BY_ID: &str = "SELECT * FROM missions WHERE id = ?";
const UPDATE_PROGRESS: &str = "UPDATE missions SET status = ?, progress = ? WHERE id = ?";

async fn fetch(conn: &mut SqliteConnection, id: MissionId) -> Result<Option<Mission>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id.get())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(Wrapper::maybe(row))
}

async fn store_progress(conn: &mut SqliteConnection, mission: &Mission) -> Result<(), StorageError> {
    sqlx::query(UPDATE_PROGRESS)
        .bind(mission.status.as_str())
        .bind(mission.progress)
        .bind(mission.id.get())
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// `SQLite`-backed mission repository.
#[derive(Clone)]
pub struct SqliteMissionRepository {
    pool: SqlitePool,
}

impl SqliteMissionRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MissionRepository for SqliteMissionRepository {
    fn list(
        &self,
        category: Option<MissionCategory>,
    ) -> impl Future<Output = Result<Vec<Mission>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = match category {
                Some(category) => {
                    sqlx::query_as::<_, Wrapper>(SELECT_BY_CATEGORY).bind(category.as_str())
                }
                None => sqlx::query_as::<_, Wrapper>(SELECT_ALL),
            };
            let rows: Vec<Wrapper> = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            Ok(fetch(&mut conn, id).await?)
        }
    }

    fn start(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;
            let Some(mut mission) = fetch(&mut tx, id).await? else {
                return Ok(None);
            };
            mission.start();
            store_progress(&mut tx, &mission).await?;
            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some(mission))
        }
    }

    fn complete(
        &self,
        id: MissionId,
    ) -> impl Future<Output = Result<Option<Mission>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;
            let Some(mut mission) = fetch(&mut tx, id).await? else {
                return Ok(None);
            };
            let reward = mission.complete();
            store_progress(&mut tx, &mission).await?;

            let mut points = singleton::get_or_create(&mut tx, &PointSummary::default()).await?;
            points.credit_mission(reward);
            singleton::save(&mut tx, &points).await?;

            let mut savings = singleton::get_or_create(&mut tx, &SavingsStat::default()).await?;
            savings.record_mission(reward);
            singleton::save(&mut tx, &savings).await?;

            let mut progress =
                singleton::get_or_create(&mut tx, &CharacterProgress::default()).await?;
            progress.record_mission();
            singleton::save(&mut tx, &progress).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some(mission))
        }
    }
}
