//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqliteConnection, SqlitePool};

use ecocampus_app::ports::DeviceRepository;
use ecocampus_domain::device::{Device, DeviceStatus, total_power_usage};
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::DeviceId;
use ecocampus_domain::points::{PointSummary, SWITCH_OFF_REWARD};
use ecocampus_domain::stats::{LocationStat, SavingsStat};

use crate::error::{StorageError, decode_error};
use crate::pool::begin_write;
use crate::singleton;

/// Location recorded when a toggle is the first thing to touch it.
const TOGGLE_FALLBACK_LOCATION: &str = "pc22실";

/// Wrapper for converting database rows into domain [`Device`].
pub(crate) struct Wrapper(pub(crate) Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let kind: String = row.try_get("type")?;

        Ok(Self(Device {
            id: DeviceId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            status: status.parse().map_err(decode_error)?,
            icon: row.try_get("icon")?,
            power_usage: row.try_get("power_usage")?,
            temperature: row.try_get("temperature")?,
            kind: kind.parse().map_err(decode_error)?,
        }))
    }
}

pub(crate) const INSERT: &str = r"
    INSERT INTO devices (id, name, status, icon, power_usage, temperature, type)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY id";
const UPDATE_SWITCH: &str = "UPDATE devices SET status = ?, power_usage = ? WHERE id = ?";

/// Sum the tracked power draw of every device.
pub(crate) async fn power_total(conn: &mut SqliteConnection) -> Result<f64, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL).fetch_all(&mut *conn).await?;
    let devices: Vec<Device> = rows.into_iter().map(|w| w.0).collect();
    Ok(total_power_usage(&devices))
}

/// `SQLite`-backed device repository.
#[derive(Clone)]
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn toggle(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(mut device) = Wrapper::maybe(row) else {
                return Ok(None);
            };

            let status = device.toggle();
            sqlx::query(UPDATE_SWITCH)
                .bind(status.as_str())
                .bind(device.power_usage)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            if status == DeviceStatus::Off {
                let mut savings =
                    singleton::get_or_create(&mut tx, &SavingsStat::default()).await?;
                savings.record_switch_off(SWITCH_OFF_REWARD);
                singleton::save(&mut tx, &savings).await?;

                let mut points =
                    singleton::get_or_create(&mut tx, &PointSummary::default()).await?;
                points.earn(SWITCH_OFF_REWARD);
                singleton::save(&mut tx, &points).await?;
            }

            let total = power_total(&mut tx).await?;
            let fallback = LocationStat {
                current_location: TOGGLE_FALLBACK_LOCATION.to_string(),
                total_power_usage: total,
            };
            let mut location = singleton::get_or_create(&mut tx, &fallback).await?;
            location.total_power_usage = total;
            singleton::save(&mut tx, &location).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some(device))
        }
    }
}
