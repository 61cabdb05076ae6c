//! `SQLite` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use ecocampus_app::ports::RoomRepository;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::RoomId;
use ecocampus_domain::room::{FALLBACK_LOCATION, Room};
use ecocampus_domain::stats::LocationStat;

use crate::device_repo::power_total;
use crate::error::{StorageError, decode_error};
use crate::pool::begin_write;
use crate::singleton;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let signal_strength: String = row.try_get("signal_strength")?;
        let signal_quality: String = row.try_get("signal_quality")?;
        let congestion: String = row.try_get("congestion")?;

        Ok(Self(Room {
            id: RoomId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            signal_strength: signal_strength.parse().map_err(decode_error)?,
            signal_quality: signal_quality.parse().map_err(decode_error)?,
            people_count: row.try_get("people_count")?,
            congestion: congestion.parse().map_err(decode_error)?,
            is_selected: row.try_get("is_selected")?,
        }))
    }
}

pub(crate) const INSERT: &str = r"
    INSERT INTO rooms
        (id, name, signal_strength, signal_quality, people_count, congestion, is_selected)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_ALL: &str = "SELECT * FROM rooms ORDER BY name ASC";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const SELECT_SELECTED: &str = "SELECT * FROM rooms WHERE is_selected = 1 LIMIT 1";
const SELECT_FIRST: &str = "SELECT * FROM rooms ORDER BY id LIMIT 1";
const CLEAR_SELECTION: &str = "UPDATE rooms SET is_selected = 0";
const MARK_SELECTED: &str = "UPDATE rooms SET is_selected = 1 WHERE id = ?";

/// Point the location singleton at `name`.
///
/// A missing row is created with the current device power total; an
/// existing row only gets its name replaced.
async fn relocate(conn: &mut SqliteConnection, name: &str) -> Result<LocationStat, StorageError> {
    let existing = singleton::find::<LocationStat>(conn).await?;
    if let Some(mut location) = existing {
        location.current_location = name.to_string();
        singleton::save(conn, &location).await?;
        return Ok(location);
    }
    let fresh = LocationStat {
        current_location: name.to_string(),
        total_power_usage: power_total(conn).await?,
    };
    singleton::get_or_create(conn, &fresh).await
}

/// `SQLite`-backed room repository.
#[derive(Clone)]
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn current_location(&self) -> impl Future<Output = Result<LocationStat, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let selected: Option<Wrapper> = sqlx::query_as(SELECT_SELECTED)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let mut selected = Wrapper::maybe(selected);
            if selected.is_none() {
                let first: Option<Wrapper> = sqlx::query_as(SELECT_FIRST)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                selected = Wrapper::maybe(first);
                if let Some(room) = &selected {
                    sqlx::query(MARK_SELECTED)
                        .bind(room.id.get())
                        .execute(&mut *tx)
                        .await
                        .map_err(StorageError::from)?;
                }
            }

            let location = match &selected {
                Some(room) => relocate(&mut tx, &room.name).await?,
                None => {
                    let fresh = LocationStat {
                        current_location: FALLBACK_LOCATION.to_string(),
                        total_power_usage: power_total(&mut tx).await?,
                    };
                    singleton::get_or_create(&mut tx, &fresh).await?
                }
            };

            tx.commit().await.map_err(StorageError::from)?;
            Ok(location)
        }
    }

    fn select(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<(Room, LocationStat)>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(mut room) = Wrapper::maybe(row) else {
                return Ok(None);
            };

            sqlx::query(CLEAR_SELECTION)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            sqlx::query(MARK_SELECTED)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            room.is_selected = true;

            let location = relocate(&mut tx, &room.name).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some((room, location)))
        }
    }
}
