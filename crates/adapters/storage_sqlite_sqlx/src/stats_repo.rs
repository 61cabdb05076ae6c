//! `SQLite` implementation of [`StatsRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ecocampus_app::ports::StatsRepository;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::stats::{
    CampusStat, CharacterProgress, RankProgress, SavingsStat, StatusCard, Streak,
};

use crate::error::StorageError;
use crate::singleton;

struct CardRow(StatusCard);

impl<'r> FromRow<'r, SqliteRow> for CardRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(StatusCard {
            icon: row.try_get("icon")?,
            label: row.try_get("label")?,
            value: row.try_get("value")?,
        }))
    }
}

pub(crate) const INSERT_CARD: &str =
    "INSERT INTO status_cards (icon, label, value) VALUES (?, ?, ?)";
const SELECT_CARDS: &str = "SELECT icon, label, value FROM status_cards ORDER BY id";

/// `SQLite`-backed stats repository.
#[derive(Clone)]
pub struct SqliteStatsRepository {
    pool: SqlitePool,
}

impl SqliteStatsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StatsRepository for SqliteStatsRepository {
    fn savings(&self) -> impl Future<Output = Result<SavingsStat, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }

    fn character_progress(
        &self,
    ) -> impl Future<Output = Result<CharacterProgress, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }

    fn find_character_progress(
        &self,
    ) -> impl Future<Output = Result<Option<CharacterProgress>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::peek(&pool).await?) }
    }

    fn status_cards(&self) -> impl Future<Output = Result<Vec<StatusCard>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<CardRow> = sqlx::query_as(SELECT_CARDS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn streak(&self) -> impl Future<Output = Result<Streak, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }

    fn rank_progress(&self) -> impl Future<Output = Result<RankProgress, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }

    fn campus_stat(&self) -> impl Future<Output = Result<CampusStat, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }
}
