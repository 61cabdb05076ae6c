//! Default-row accessor for the single-row summary tables.
//!
//! Every singleton table pins its primary key to `1`, so creating the row is
//! an `INSERT … ON CONFLICT(id) DO NOTHING`: concurrent first accesses all
//! converge on the same row instead of inserting duplicates.

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqliteConnection, SqlitePool};

use ecocampus_domain::points::PointSummary;
use ecocampus_domain::stats::{
    CampusStat, CharacterProgress, LocationStat, RankProgress, SavingsStat, Streak,
};

use crate::error::{StorageError, decode_error};

pub(crate) type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A domain record stored as the only row of its table.
pub(crate) trait Singleton: Sized + Send + Sync {
    /// Read the row.
    const SELECT: &'static str;
    /// Insert the row with id 1 unless it exists. Binds like [`Self::SAVE`].
    const INSERT_IF_MISSING: &'static str;
    /// Insert or overwrite the row with id 1.
    const SAVE: &'static str;

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error>;

    /// Bind every column, in table order, onto `query`.
    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// Read the row if it exists.
pub(crate) async fn find<T: Singleton>(
    conn: &mut SqliteConnection,
) -> Result<Option<T>, StorageError> {
    let row = sqlx::query(T::SELECT).fetch_optional(&mut *conn).await?;
    Ok(row.as_ref().map(T::decode).transpose()?)
}

/// Read the row, creating it from `defaults` when missing.
pub(crate) async fn get_or_create<T: Singleton>(
    conn: &mut SqliteConnection,
    defaults: &T,
) -> Result<T, StorageError> {
    if let Some(existing) = find(conn).await? {
        return Ok(existing);
    }
    defaults
        .bind(sqlx::query(T::INSERT_IF_MISSING))
        .execute(&mut *conn)
        .await?;
    let row = sqlx::query(T::SELECT).fetch_one(&mut *conn).await?;
    Ok(T::decode(&row)?)
}

/// Overwrite the row with `value`.
pub(crate) async fn save<T: Singleton>(
    conn: &mut SqliteConnection,
    value: &T,
) -> Result<(), StorageError> {
    value.bind(sqlx::query(T::SAVE)).execute(&mut *conn).await?;
    Ok(())
}

/// Pool-level [`get_or_create`] with the type's defaults.
pub(crate) async fn load<T: Singleton + Default>(pool: &SqlitePool) -> Result<T, StorageError> {
    let mut conn = pool.acquire().await?;
    get_or_create(&mut conn, &T::default()).await
}

/// Pool-level [`find`].
pub(crate) async fn peek<T: Singleton>(pool: &SqlitePool) -> Result<Option<T>, StorageError> {
    let mut conn = pool.acquire().await?;
    find(&mut conn).await
}

impl Singleton for LocationStat {
    const SELECT: &'static str =
        "SELECT current_location, total_power_usage FROM location_stats WHERE id = 1";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO location_stats (id, current_location, total_power_usage)
        VALUES (1, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO location_stats (id, current_location, total_power_usage)
        VALUES (1, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            current_location = excluded.current_location,
            total_power_usage = excluded.total_power_usage
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            current_location: row.try_get("current_location")?,
            total_power_usage: row.try_get("total_power_usage")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.current_location)
            .bind(self.total_power_usage)
    }
}

impl Singleton for SavingsStat {
    const SELECT: &'static str = r"
        SELECT today_savings, participated_missions, acquired_points, department_average
        FROM savings_stats WHERE id = 1
    ";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO savings_stats
            (id, today_savings, participated_missions, acquired_points, department_average)
        VALUES (1, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO savings_stats
            (id, today_savings, participated_missions, acquired_points, department_average)
        VALUES (1, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            today_savings = excluded.today_savings,
            participated_missions = excluded.participated_missions,
            acquired_points = excluded.acquired_points,
            department_average = excluded.department_average
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            today_savings: row.try_get("today_savings")?,
            participated_missions: row.try_get("participated_missions")?,
            acquired_points: row.try_get("acquired_points")?,
            department_average: row.try_get("department_average")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.today_savings)
            .bind(self.participated_missions)
            .bind(self.acquired_points)
            .bind(self.department_average)
    }
}

impl Singleton for CharacterProgress {
    const SELECT: &'static str = r"
        SELECT current_level, next_level, progress, missions_to_next_level,
               character_name, character_emoji
        FROM character_progress WHERE id = 1
    ";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO character_progress
            (id, current_level, next_level, progress, missions_to_next_level,
             character_name, character_emoji)
        VALUES (1, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO character_progress
            (id, current_level, next_level, progress, missions_to_next_level,
             character_name, character_emoji)
        VALUES (1, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            current_level = excluded.current_level,
            next_level = excluded.next_level,
            progress = excluded.progress,
            missions_to_next_level = excluded.missions_to_next_level,
            character_name = excluded.character_name,
            character_emoji = excluded.character_emoji
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            current_level: row.try_get("current_level")?,
            next_level: row.try_get("next_level")?,
            progress: row.try_get("progress")?,
            missions_to_next_level: row.try_get("missions_to_next_level")?,
            character_name: row.try_get("character_name")?,
            character_emoji: row.try_get("character_emoji")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.current_level)
            .bind(self.next_level)
            .bind(self.progress)
            .bind(self.missions_to_next_level)
            .bind(&self.character_name)
            .bind(&self.character_emoji)
    }
}

impl Singleton for Streak {
    const SELECT: &'static str = "SELECT days, completed_days, message FROM streaks WHERE id = 1";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO streaks (id, days, completed_days, message)
        VALUES (1, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO streaks (id, days, completed_days, message)
        VALUES (1, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            days = excluded.days,
            completed_days = excluded.completed_days,
            message = excluded.message
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let completed_days: String = row.try_get("completed_days")?;
        let completed_days = completed_days
            .split(',')
            .map(str::trim)
            .filter(|day| !day.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()
            .map_err(decode_error)?;
        Ok(Self {
            days: row.try_get("days")?,
            completed_days,
            message: row.try_get("message")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        let completed_days = self
            .completed_days
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        query
            .bind(self.days)
            .bind(completed_days)
            .bind(&self.message)
    }
}

impl Singleton for RankProgress {
    const SELECT: &'static str = r"
        SELECT current_rank, next_rank, current_points, points_to_next_rank, progress
        FROM rank_progress WHERE id = 1
    ";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO rank_progress
            (id, current_rank, next_rank, current_points, points_to_next_rank, progress)
        VALUES (1, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO rank_progress
            (id, current_rank, next_rank, current_points, points_to_next_rank, progress)
        VALUES (1, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            current_rank = excluded.current_rank,
            next_rank = excluded.next_rank,
            current_points = excluded.current_points,
            points_to_next_rank = excluded.points_to_next_rank,
            progress = excluded.progress
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            current_rank: row.try_get("current_rank")?,
            next_rank: row.try_get("next_rank")?,
            current_points: row.try_get("current_points")?,
            points_to_next_rank: row.try_get("points_to_next_rank")?,
            progress: row.try_get("progress")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.current_rank)
            .bind(&self.next_rank)
            .bind(self.current_points)
            .bind(self.points_to_next_rank)
            .bind(self.progress)
    }
}

impl Singleton for CampusStat {
    const SELECT: &'static str = r"
        SELECT today_savings, student_participation, waste_rooms
        FROM campus_stats WHERE id = 1
    ";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO campus_stats (id, today_savings, student_participation, waste_rooms)
        VALUES (1, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO campus_stats (id, today_savings, student_participation, waste_rooms)
        VALUES (1, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            today_savings = excluded.today_savings,
            student_participation = excluded.student_participation,
            waste_rooms = excluded.waste_rooms
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            today_savings: row.try_get("today_savings")?,
            student_participation: row.try_get("student_participation")?,
            waste_rooms: row.try_get("waste_rooms")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.today_savings)
            .bind(self.student_participation)
            .bind(self.waste_rooms)
    }
}

impl Singleton for PointSummary {
    const SELECT: &'static str = r"
        SELECT current_points, weekly_increase, used_points, total_donated
        FROM point_summary WHERE id = 1
    ";
    const INSERT_IF_MISSING: &'static str = r"
        INSERT INTO point_summary
            (id, current_points, weekly_increase, used_points, total_donated)
        VALUES (1, ?, ?, ?, ?)
        ON CONFLICT(id) DO NOTHING
    ";
    const SAVE: &'static str = r"
        INSERT INTO point_summary
            (id, current_points, weekly_increase, used_points, total_donated)
        VALUES (1, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            current_points = excluded.current_points,
            weekly_increase = excluded.weekly_increase,
            used_points = excluded.used_points,
            total_donated = excluded.total_donated
    ";

    fn decode(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            current_points: row.try_get("current_points")?,
            weekly_increase: row.try_get("weekly_increase")?,
            used_points: row.try_get("used_points")?,
            total_donated: row.try_get("total_donated")?,
        })
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.current_points)
            .bind(self.weekly_increase)
            .bind(self.used_points)
            .bind(self.total_donated)
    }
}
