//! Points — the balance, the catalogs it can be spent on, and the history
//! screens around it.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{DonateCategoryId, ExchangeItemId, RecordId};

/// Points credited when a device is switched off.
pub const SWITCH_OFF_REWARD: i64 = 10;

define_label!(
    /// Exchange catalog tab.
    ExchangeCategory {
        Voucher => "voucher",
        Gifticon => "gifticon",
    }
);

/// The user's point balance and its running totals. Singleton row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSummary {
    pub current_points: i64,
    pub weekly_increase: i64,
    pub used_points: i64,
    pub total_donated: i64,
}

impl PointSummary {
    /// Credit points to the balance without touching the weekly total.
    pub fn earn(&mut self, points: i64) {
        self.current_points += points;
    }

    /// Credit the reward of a completed mission.
    pub fn credit_mission(&mut self, points: i64) {
        self.current_points += points;
        self.weekly_increase += points;
    }

    /// Debit the cost of an exchanged item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InsufficientPoints`] without changing the
    /// balance when it does not cover `cost`.
    pub fn spend(&mut self, cost: i64) -> Result<(), ValidationError> {
        self.ensure_covers(cost)?;
        self.current_points -= cost;
        self.used_points += cost;
        Ok(())
    }

    /// Debit a donation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeAmount`] for amounts below zero and
    /// [`ValidationError::InsufficientPoints`] when the balance does not cover
    /// `amount`. The balance is unchanged on error.
    pub fn donate(&mut self, amount: i64) -> Result<(), ValidationError> {
        if amount < 0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        self.ensure_covers(amount)?;
        self.current_points -= amount;
        self.total_donated += amount;
        Ok(())
    }

    fn ensure_covers(&self, required: i64) -> Result<(), ValidationError> {
        if self.current_points < required {
            return Err(ValidationError::InsufficientPoints {
                required,
                available: self.current_points,
            });
        }
        Ok(())
    }
}

/// A reward that can be bought with points. Catalog rows are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeItem {
    pub id: ExchangeItemId,
    pub icon: String,
    pub title: String,
    /// Empty when the item carries no discount label.
    pub discount: String,
    pub points: i64,
    pub category: ExchangeCategory,
}

/// A cause points can be donated to, with its suggested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateCategory {
    pub id: DonateCategoryId,
    pub icon: String,
    pub title: String,
    pub points: i64,
}

impl DonateCategory {
    /// Resolve the amount to donate: an explicit zero means "the suggested amount".
    #[must_use]
    pub fn resolve_amount(&self, requested: i64) -> i64 {
        if requested == 0 { self.points } else { requested }
    }
}

/// Points earned on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub day: String,
    pub points: i64,
}

/// A line of the points history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: RecordId,
    pub emoji: String,
    pub title: String,
    pub date: String,
    pub points: i64,
}

/// Outcome of a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeReceipt {
    pub item: ExchangeItem,
    pub remaining_points: i64,
}

/// A donation request as received from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DonationRequest {
    pub category_id: Option<DonateCategoryId>,
    pub amount: i64,
}

/// Outcome of a successful donation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationReceipt {
    pub category: Option<DonateCategory>,
    pub amount: i64,
    pub remaining_points: i64,
    pub total_donated: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PointSummary {
        PointSummary {
            current_points: 850,
            weekly_increase: 240,
            used_points: 300,
            total_donated: 300,
        }
    }

    #[test]
    fn should_debit_balance_and_track_usage_when_spending() {
        let mut summary = seeded();
        summary.spend(500).unwrap();
        assert_eq!(summary.current_points, 350);
        assert_eq!(summary.used_points, 800);
    }

    #[test]
    fn should_reject_spend_and_keep_balance_when_insufficient() {
        let mut summary = seeded();
        let err = summary.spend(1500).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InsufficientPoints {
                required: 1500,
                available: 850,
            }
        );
        assert_eq!(summary, seeded());
    }

    #[test]
    fn should_allow_spending_exact_balance() {
        let mut summary = seeded();
        summary.spend(850).unwrap();
        assert_eq!(summary.current_points, 0);
    }

    #[test]
    fn should_track_donations() {
        let mut summary = seeded();
        summary.donate(700).unwrap();
        assert_eq!(summary.current_points, 150);
        assert_eq!(summary.total_donated, 1000);
    }

    #[test]
    fn should_accept_zero_donation_as_noop() {
        let mut summary = PointSummary::default();
        summary.donate(0).unwrap();
        assert_eq!(summary, PointSummary::default());
    }

    #[test]
    fn should_reject_negative_donation() {
        let mut summary = seeded();
        assert_eq!(
            summary.donate(-5).unwrap_err(),
            ValidationError::NegativeAmount(-5)
        );
        assert_eq!(summary, seeded());
    }

    #[test]
    fn should_credit_mission_to_balance_and_weekly_total() {
        let mut summary = seeded();
        summary.credit_mission(50);
        assert_eq!(summary.current_points, 900);
        assert_eq!(summary.weekly_increase, 290);
    }

    #[test]
    fn should_substitute_suggested_amount_when_zero_requested() {
        let category = DonateCategory {
            id: DonateCategoryId::new(1),
            icon: "📚".to_string(),
            title: "책 물려받기".to_string(),
            points: 700,
        };
        assert_eq!(category.resolve_amount(0), 700);
        assert_eq!(category.resolve_amount(100), 100);
    }

    #[test]
    fn should_serialize_summary_in_camel_case() {
        let json = serde_json::to_value(seeded()).unwrap();
        assert_eq!(json["currentPoints"], 850);
        assert_eq!(json["weeklyIncrease"], 240);
        assert_eq!(json["usedPoints"], 300);
        assert_eq!(json["totalDonated"], 300);
    }
}
