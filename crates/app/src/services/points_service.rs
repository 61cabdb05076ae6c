//! Points service — balance, history, exchange and donation use-cases.

use ecocampus_domain::error::{CampusError, NotFoundError};
use ecocampus_domain::id::ExchangeItemId;
use ecocampus_domain::points::{
    DonateCategory, DonationReceipt, DonationRequest, ExchangeCategory, ExchangeItem,
    ExchangeReceipt, PointSummary, RecentActivity, WeeklyActivity,
};

use crate::ports::PointsRepository;

/// Application service for the point balance.
pub struct PointsService<R> {
    repo: R,
}

impl<R: PointsRepository> PointsService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Current balance and running totals.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn summary(&self) -> Result<PointSummary, CampusError> {
        self.repo.summary().await
    }

    /// Points history, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn recent_activities(&self) -> Result<Vec<RecentActivity>, CampusError> {
        self.repo.recent_activities().await
    }

    /// Points earned per weekday.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn weekly_activities(&self) -> Result<Vec<WeeklyActivity>, CampusError> {
        self.repo.weekly_activities().await
    }

    /// Exchange catalog for a raw category label. Unknown labels match nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn exchange_items(&self, category: &str) -> Result<Vec<ExchangeItem>, CampusError> {
        match category.parse() {
            Ok(category) => self.repo.exchange_items(category).await,
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Every donation category.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn donate_categories(&self) -> Result<Vec<DonateCategory>, CampusError> {
        self.repo.donate_categories().await
    }

    /// Buy the item `id` listed under the raw `category` label.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::NotFound`] when no item matches both `id` and
    /// `category`, [`CampusError::Validation`] when the balance is too low,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn exchange(
        &self,
        id: ExchangeItemId,
        category: &str,
    ) -> Result<ExchangeReceipt, CampusError> {
        let not_found = || NotFoundError {
            entity: "Item",
            id: id.to_string(),
        };
        let category: ExchangeCategory = category.parse().map_err(|_| not_found())?;
        let receipt = self
            .repo
            .exchange(id, category)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(
            item = %receipt.item.id,
            cost = receipt.item.points,
            remaining = receipt.remaining_points,
            "points exchanged"
        );
        Ok(receipt)
    }

    /// Donate points.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Validation`] for a negative amount or when the
    /// balance is too low, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn donate(&self, request: DonationRequest) -> Result<DonationReceipt, CampusError> {
        let receipt = self.repo.donate(request).await?;
        tracing::info!(
            amount = receipt.amount,
            remaining = receipt.remaining_points,
            "points donated"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocampus_domain::error::ValidationError;
    use ecocampus_domain::id::DonateCategoryId;
    use std::sync::Mutex;

    struct InMemoryPointsRepo {
        summary: Mutex<PointSummary>,
        items: Vec<ExchangeItem>,
        categories: Vec<DonateCategory>,
    }

    impl PointsRepository for InMemoryPointsRepo {
        async fn summary(&self) -> Result<PointSummary, CampusError> {
            Ok(self.summary.lock().unwrap().clone())
        }

        async fn find_summary(&self) -> Result<Option<PointSummary>, CampusError> {
            Ok(Some(self.summary.lock().unwrap().clone()))
        }

        async fn recent_activities(&self) -> Result<Vec<RecentActivity>, CampusError> {
            Ok(vec![])
        }

        async fn weekly_activities(&self) -> Result<Vec<WeeklyActivity>, CampusError> {
            Ok(vec![])
        }

        async fn exchange_items(
            &self,
            category: ExchangeCategory,
        ) -> Result<Vec<ExchangeItem>, CampusError> {
            Ok(self
                .items
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect())
        }

        async fn donate_categories(&self) -> Result<Vec<DonateCategory>, CampusError> {
            Ok(self.categories.clone())
        }

        async fn exchange(
            &self,
            id: ExchangeItemId,
            category: ExchangeCategory,
        ) -> Result<Option<ExchangeReceipt>, CampusError> {
            let Some(item) = self
                .items
                .iter()
                .find(|i| i.id == id && i.category == category)
                .cloned()
            else {
                return Ok(None);
            };
            let mut summary = self.summary.lock().unwrap();
            summary.spend(item.points)?;
            Ok(Some(ExchangeReceipt {
                item,
                remaining_points: summary.current_points,
            }))
        }

        async fn donate(&self, request: DonationRequest) -> Result<DonationReceipt, CampusError> {
            let category = request
                .category_id
                .and_then(|id| self.categories.iter().find(|c| c.id == id).cloned());
            let amount = category
                .as_ref()
                .map_or(request.amount, |c| c.resolve_amount(request.amount));
            let mut summary = self.summary.lock().unwrap();
            summary.donate(amount)?;
            Ok(DonationReceipt {
                category,
                amount,
                remaining_points: summary.current_points,
                total_donated: summary.total_donated,
            })
        }
    }

    fn make_service() -> PointsService<InMemoryPointsRepo> {
        PointsService::new(InMemoryPointsRepo {
            summary: Mutex::new(PointSummary {
                current_points: 850,
                weekly_increase: 240,
                used_points: 300,
                total_donated: 300,
            }),
            items: vec![
                ExchangeItem {
                    id: ExchangeItemId::new(1),
                    icon: "🍽️".to_string(),
                    title: "교내 식당 할인권".to_string(),
                    discount: "10% 할인".to_string(),
                    points: 1500,
                    category: ExchangeCategory::Voucher,
                },
                ExchangeItem {
                    id: ExchangeItemId::new(6),
                    icon: "🛠️".to_string(),
                    title: "커스텀 재료 구매".to_string(),
                    discount: "10% 할인".to_string(),
                    points: 500,
                    category: ExchangeCategory::Voucher,
                },
            ],
            categories: vec![DonateCategory {
                id: DonateCategoryId::new(1),
                icon: "📚".to_string(),
                title: "책 물려받기".to_string(),
                points: 700,
            }],
        })
    }

    #[tokio::test]
    async fn should_return_empty_catalog_when_category_unknown() {
        let svc = make_service();
        assert!(svc.exchange_items("coupon").await.unwrap().is_empty());
        assert_eq!(svc.exchange_items("voucher").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_debit_balance_when_exchanging() {
        let svc = make_service();
        let receipt = svc.exchange(ExchangeItemId::new(6), "voucher").await.unwrap();
        assert_eq!(receipt.remaining_points, 350);
        assert_eq!(svc.summary().await.unwrap().used_points, 800);
    }

    #[tokio::test]
    async fn should_reject_exchange_when_points_insufficient() {
        let svc = make_service();
        let result = svc.exchange(ExchangeItemId::new(1), "voucher").await;
        assert!(matches!(
            result,
            Err(CampusError::Validation(ValidationError::InsufficientPoints { .. }))
        ));
        assert_eq!(svc.summary().await.unwrap().current_points, 850);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_in_other_category() {
        let svc = make_service();
        let result = svc.exchange(ExchangeItemId::new(6), "gifticon").await;
        assert!(matches!(result, Err(CampusError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_unknown() {
        let svc = make_service();
        let result = svc.exchange(ExchangeItemId::new(6), "coupon").await;
        assert!(matches!(result, Err(CampusError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_donate_suggested_amount_when_zero_requested() {
        let svc = make_service();
        let receipt = svc
            .donate(DonationRequest {
                category_id: Some(DonateCategoryId::new(1)),
                amount: 0,
            })
            .await
            .unwrap();
        assert_eq!(receipt.amount, 700);
        assert_eq!(receipt.remaining_points, 150);
        assert_eq!(receipt.total_donated, 1000);
    }

    #[tokio::test]
    async fn should_allow_empty_donation() {
        let svc = make_service();
        let receipt = svc.donate(DonationRequest::default()).await.unwrap();
        assert_eq!(receipt.amount, 0);
        assert!(receipt.category.is_none());
        assert_eq!(receipt.remaining_points, 850);
    }
}
