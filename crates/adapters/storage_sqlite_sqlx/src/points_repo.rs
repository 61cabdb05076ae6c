//! `SQLite` implementation of [`PointsRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use ecocampus_app::ports::PointsRepository;
use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::{DonateCategoryId, ExchangeItemId, RecordId};
use ecocampus_domain::points::{
    DonateCategory, DonationReceipt, DonationRequest, ExchangeCategory, ExchangeItem,
    ExchangeReceipt, PointSummary, RecentActivity, WeeklyActivity,
};

use crate::error::{StorageError, decode_error};
use crate::pool::begin_write;
use crate::singleton;

struct ItemRow(ExchangeItem);

impl<'r> FromRow<'r, SqliteRow> for ItemRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let category: String = row.try_get("category")?;

        Ok(Self(ExchangeItem {
            id: ExchangeItemId::new(row.try_get("id")?),
            icon: row.try_get("icon")?,
            title: row.try_get("title")?,
            discount: row.try_get("discount")?,
            points: row.try_get("points")?,
            category: category.parse().map_err(decode_error)?,
        }))
    }
}

struct CategoryRow(DonateCategory);

impl<'r> FromRow<'r, SqliteRow> for CategoryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(DonateCategory {
            id: DonateCategoryId::new(row.try_get("id")?),
            icon: row.try_get("icon")?,
            title: row.try_get("title")?,
            points: row.try_get("points")?,
        }))
    }
}

struct RecentRow(RecentActivity);

impl<'r> FromRow<'r, SqliteRow> for RecentRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(RecentActivity {
            id: RecordId::new(row.try_get("id")?),
            emoji: row.try_get("emoji")?,
            title: row.try_get("title")?,
            date: row.try_get("date")?,
            points: row.try_get("points")?,
        }))
    }
}

struct WeeklyRow(WeeklyActivity);

impl<'r> FromRow<'r, SqliteRow> for WeeklyRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(WeeklyActivity {
            day: row.try_get("day")?,
            points: row.try_get("points")?,
        }))
    }
}

pub(crate) const INSERT_ITEM: &str = r"
    INSERT INTO exchange_items (id, icon, title, discount, points, category)
    VALUES (?, ?, ?, ?, ?, ?)
";
pub(crate) const INSERT_CATEGORY: &str =
    "INSERT INTO donate_categories (id, icon, title, points) VALUES (?, ?, ?, ?)";
pub(crate) const INSERT_RECENT: &str =
    "INSERT INTO recent_activities (id, emoji, title, date, points) VALUES (?, ?, ?, ?, ?)";
pub(crate) const INSERT_WEEKLY: &str = "INSERT INTO weekly_activities (day, points) VALUES (?, ?)";

const SELECT_ITEMS: &str = "SELECT * FROM exchange_items WHERE category = ? ORDER BY id";
const SELECT_ITEM: &str = "SELECT * FROM exchange_items WHERE id = ? AND category = ?";
const SELECT_CATEGORIES: &str = "SELECT * FROM donate_categories ORDER BY id";
const SELECT_CATEGORY: &str = "SELECT * FROM donate_categories WHERE id = ?";
const SELECT_RECENT: &str = "SELECT * FROM recent_activities ORDER BY id DESC";
const SELECT_WEEKLY: &str = "SELECT day, points FROM weekly_activities ORDER BY id";

/// `SQLite`-backed points repository.
#[derive(Clone)]
pub struct SqlitePointsRepository {
    pool: SqlitePool,
}

impl SqlitePointsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PointsRepository for SqlitePointsRepository {
    fn summary(&self) -> impl Future<Output = Result<PointSummary, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::load(&pool).await?) }
    }

    fn find_summary(
        &self,
    ) -> impl Future<Output = Result<Option<PointSummary>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(singleton::peek(&pool).await?) }
    }

    fn recent_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<RecentActivity>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<RecentRow> = sqlx::query_as(SELECT_RECENT)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn weekly_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<WeeklyActivity>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<WeeklyRow> = sqlx::query_as(SELECT_WEEKLY)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn exchange_items(
        &self,
        category: ExchangeCategory,
    ) -> impl Future<Output = Result<Vec<ExchangeItem>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ItemRow> = sqlx::query_as(SELECT_ITEMS)
                .bind(category.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn donate_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<DonateCategory>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<CategoryRow> = sqlx::query_as(SELECT_CATEGORIES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn exchange(
        &self,
        id: ExchangeItemId,
        category: ExchangeCategory,
    ) -> impl Future<Output = Result<Option<ExchangeReceipt>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let row: Option<ItemRow> = sqlx::query_as(SELECT_ITEM)
                .bind(id.get())
                .bind(category.as_str())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Some(ItemRow(item)) = row else {
                return Ok(None);
            };

            let mut summary = singleton::get_or_create(&mut tx, &PointSummary::default()).await?;
            summary.spend(item.points)?;
            singleton::save(&mut tx, &summary).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(Some(ExchangeReceipt {
                item,
                remaining_points: summary.current_points,
            }))
        }
    }

    fn donate(
        &self,
        request: DonationRequest,
    ) -> impl Future<Output = Result<DonationReceipt, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = begin_write(&pool).await?;

            let category = match request.category_id {
                Some(id) => {
                    let row: Option<CategoryRow> = sqlx::query_as(SELECT_CATEGORY)
                        .bind(id.get())
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(StorageError::from)?;
                    row.map(|r| r.0)
                }
                None => None,
            };
            let amount = category
                .as_ref()
                .map_or(request.amount, |c| c.resolve_amount(request.amount));

            let mut summary = singleton::get_or_create(&mut tx, &PointSummary::default()).await?;
            summary.donate(amount)?;
            singleton::save(&mut tx, &summary).await?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(DonationReceipt {
                category,
                amount,
                remaining_points: summary.current_points,
                total_donated: summary.total_donated,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use ecocampus_domain::error::ValidationError;

    async fn setup(balance: i64) -> (SqlitePool, SqlitePointsRepository) {
        let db = Config::in_memory().build().await.unwrap();
        let pool = db.pool().clone();
        let items = [
            (1, "☕", "카페 할인권", "10%", 500, "voucher"),
            (2, "🍔", "학식 쿠폰", "", 800, "voucher"),
            (3, "🎁", "편의점 기프티콘", "", 300, "gifticon"),
        ];
        for (id, icon, title, discount, points, category) in items {
            sqlx::query(INSERT_ITEM)
                .bind(id)
                .bind(icon)
                .bind(title)
                .bind(discount)
                .bind(points)
                .bind(category)
                .execute(&pool)
                .await
                .unwrap();
        }
        sqlx::query(INSERT_CATEGORY)
            .bind(1)
            .bind("📚")
            .bind("책 물려받기")
            .bind(700)
            .execute(&pool)
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        singleton::save(
            &mut conn,
            &PointSummary {
                current_points: balance,
                ..PointSummary::default()
            },
        )
        .await
        .unwrap();
        drop(conn);

        (pool.clone(), SqlitePointsRepository::new(pool))
    }

    #[tokio::test]
    async fn should_list_items_of_one_category() {
        let (_, repo) = setup(0).await;
        let vouchers = repo.exchange_items(ExchangeCategory::Voucher).await.unwrap();
        assert_eq!(vouchers.len(), 2);
        assert_eq!(vouchers[0].discount, "10%");
        assert_eq!(vouchers[1].discount, "");
    }

    #[tokio::test]
    async fn should_debit_balance_when_exchanging() {
        let (pool, repo) = setup(850).await;
        let receipt = repo
            .exchange(ExchangeItemId::new(1), ExchangeCategory::Voucher)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(receipt.remaining_points, 350);
        assert_eq!(receipt.item.title, "카페 할인권");

        let summary: PointSummary = singleton::load(&pool).await.unwrap();
        assert_eq!(summary.current_points, 350);
        assert_eq!(summary.used_points, 500);
    }

    #[tokio::test]
    async fn should_return_none_when_item_is_in_another_category() {
        let (_, repo) = setup(850).await;
        let receipt = repo
            .exchange(ExchangeItemId::new(3), ExchangeCategory::Voucher)
            .await
            .unwrap();
        assert!(receipt.is_none());
    }

    #[tokio::test]
    async fn should_leave_balance_untouched_when_insufficient() {
        let (pool, repo) = setup(100).await;
        let err = repo
            .exchange(ExchangeItemId::new(2), ExchangeCategory::Voucher)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CampusError::Validation(ValidationError::InsufficientPoints { .. })
        ));
        let summary: PointSummary = singleton::load(&pool).await.unwrap();
        assert_eq!(summary.current_points, 100);
        assert_eq!(summary.used_points, 0);
    }

    #[tokio::test]
    async fn should_donate_suggested_amount_when_zero_requested() {
        let (_, repo) = setup(850).await;
        let receipt = repo
            .donate(DonationRequest {
                category_id: Some(DonateCategoryId::new(1)),
                amount: 0,
            })
            .await
            .unwrap();
        assert_eq!(receipt.amount, 700);
        assert_eq!(receipt.remaining_points, 150);
        assert_eq!(receipt.total_donated, 700);
        assert_eq!(receipt.category.unwrap().title, "책 물려받기");
    }

    #[tokio::test]
    async fn should_donate_without_category_when_id_unknown() {
        let (_, repo) = setup(850).await;
        let receipt = repo
            .donate(DonationRequest {
                category_id: Some(DonateCategoryId::new(99)),
                amount: 100,
            })
            .await
            .unwrap();
        assert!(receipt.category.is_none());
        assert_eq!(receipt.remaining_points, 750);
    }

    #[tokio::test]
    async fn should_reject_donation_above_balance() {
        let (pool, repo) = setup(50).await;
        let err = repo
            .donate(DonationRequest {
                category_id: None,
                amount: 100,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::Validation(_)));
        let summary: PointSummary = singleton::load(&pool).await.unwrap();
        assert_eq!(summary.total_donated, 0);
    }

    #[tokio::test]
    async fn should_list_recent_activities_newest_first() {
        let (pool, repo) = setup(0).await;
        for (id, title) in [(1, "텀블러 사용"), (2, "계단 이용")] {
            sqlx::query(INSERT_RECENT)
                .bind(id)
                .bind("🌱")
                .bind(title)
                .bind("2024.03.15")
                .bind(10)
                .execute(&pool)
                .await
                .unwrap();
        }
        let recent = repo.recent_activities().await.unwrap();
        assert_eq!(recent[0].title, "계단 이용");
        assert_eq!(recent[1].title, "텀블러 사용");
    }

    #[tokio::test]
    async fn should_not_create_summary_when_peeking() {
        let db = Config::in_memory().build().await.unwrap();
        let repo = SqlitePointsRepository::new(db.pool().clone());
        assert!(repo.find_summary().await.unwrap().is_none());
        assert_eq!(repo.summary().await.unwrap(), PointSummary::default());
        assert!(repo.find_summary().await.unwrap().is_some());
    }
}
