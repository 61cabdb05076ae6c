//! Points repository port — the balance, its catalogs and the two debits.

use std::future::Future;

use ecocampus_domain::error::CampusError;
use ecocampus_domain::id::ExchangeItemId;
use ecocampus_domain::points::{
    DonateCategory, DonationReceipt, DonationRequest, ExchangeCategory, ExchangeItem,
    ExchangeReceipt, PointSummary, RecentActivity, WeeklyActivity,
};

/// Repository for the [`PointSummary`] singleton and everything spent against it.
pub trait PointsRepository {
    /// Get the point summary, creating the zero row on first access.
    fn summary(&self) -> impl Future<Output = Result<PointSummary, CampusError>> + Send;

    /// Read the point summary without creating it.
    fn find_summary(
        &self,
    ) -> impl Future<Output = Result<Option<PointSummary>, CampusError>> + Send;

    /// Points history, newest first.
    fn recent_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<RecentActivity>, CampusError>> + Send;

    /// Points earned per weekday, in stored order.
    fn weekly_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<WeeklyActivity>, CampusError>> + Send;

    /// Exchange catalog of one category.
    fn exchange_items(
        &self,
        category: ExchangeCategory,
    ) -> impl Future<Output = Result<Vec<ExchangeItem>, CampusError>> + Send;

    /// Every donation category.
    fn donate_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<DonateCategory>, CampusError>> + Send;

    /// Buy an item with points as one unit of work.
    ///
    /// Returns `None` when no item matches both `id` and `category`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error, committing nothing, when the balance
    /// does not cover the item.
    fn exchange(
        &self,
        id: ExchangeItemId,
        category: ExchangeCategory,
    ) -> impl Future<Output = Result<Option<ExchangeReceipt>, CampusError>> + Send;

    /// Donate points as one unit of work.
    ///
    /// A request amount of zero is replaced by the resolved category's
    /// suggested amount. An unknown category id resolves to no category.
    ///
    /// # Errors
    ///
    /// Fails with a validation error, committing nothing, for negative
    /// amounts or when the balance does not cover the amount.
    fn donate(
        &self,
        request: DonationRequest,
    ) -> impl Future<Output = Result<DonationReceipt, CampusError>> + Send;
}
