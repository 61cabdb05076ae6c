//! JSON REST handlers for points, the exchange catalog and donations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Deserializer, Serialize};

use ecocampus_app::ports::Repositories;
use ecocampus_domain::id::{DonateCategoryId, ExchangeItemId};
use ecocampus_domain::points::{
    DonateCategory, DonationRequest, ExchangeItem, PointSummary, RecentActivity, WeeklyActivity,
};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_EXCHANGE_CATEGORY: &str = "voucher";

fn voucher() -> String {
    DEFAULT_EXCHANGE_CATEGORY.to_string()
}

/// An identifier as clients send it: a JSON number or a numeric string.
///
/// Fractional numbers are truncated toward zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Integer(i64),
    Fractional(f64),
    Text(String),
}

impl RawId {
    #[allow(clippy::cast_possible_truncation)]
    fn into_text(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Fractional(value) => (value.trunc() as i64).to_string(),
            Self::Text(value) => value,
        }
    }
}

/// A point amount: whole, or fractional and truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
fn whole_points<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Whole(i64),
        Fractional(f64),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Whole(value) => value,
        Amount::Fractional(value) => value.trunc() as i64,
    })
}

/// Query string of the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default = "voucher")]
    pub category: String,
}

/// Request body for exchanging points.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub item_id: Option<RawId>,
    #[serde(default = "voucher")]
    pub category: String,
}

/// Request body for donating points.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateRequest {
    pub category_id: Option<RawId>,
    #[serde(default, deserialize_with = "whole_points")]
    pub amount: i64,
}

/// Body of a successful exchange.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeBody {
    pub message: &'static str,
    pub item: ExchangeItem,
    pub remaining_points: i64,
}

/// Body of a successful donation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonateBody {
    pub message: &'static str,
    pub category: Option<DonateCategory>,
    pub amount: i64,
    pub remaining_points: i64,
    pub total_donated: i64,
}

/// `GET /api/points`
pub async fn summary<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<PointSummary>, ApiError> {
    Ok(Json(state.points_service.summary().await?))
}

/// `GET /api/points/activities`
pub async fn activities<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<RecentActivity>>, ApiError> {
    Ok(Json(state.points_service.recent_activities().await?))
}

/// `GET /api/points/weekly`
pub async fn weekly<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<WeeklyActivity>>, ApiError> {
    Ok(Json(state.points_service.weekly_activities().await?))
}

/// `GET /api/points/exchange?category=`
pub async fn exchange_items<R: Repositories>(
    State(state): State<AppState<R>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<ExchangeItem>>, ApiError> {
    Ok(Json(
        state.points_service.exchange_items(&query.category).await?,
    ))
}

/// `GET /api/points/donate/categories`
pub async fn donate_categories<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<DonateCategory>>, ApiError> {
    Ok(Json(state.points_service.donate_categories().await?))
}

/// `POST /api/points/exchange`
pub async fn exchange<R: Repositories>(
    State(state): State<AppState<R>>,
    body: Result<Json<ExchangeRequest>, JsonRejection>,
) -> Result<Json<ExchangeBody>, ApiError> {
    let Json(req) = body?;
    let raw = req.item_id.map(RawId::into_text).unwrap_or_default();
    let item_id = ExchangeItemId::parse(&raw)?;
    let receipt = state
        .points_service
        .exchange(item_id, &req.category)
        .await?;
    Ok(Json(ExchangeBody {
        message: "Exchange successful",
        item: receipt.item,
        remaining_points: receipt.remaining_points,
    }))
}

/// `POST /api/points/donate`
pub async fn donate<R: Repositories>(
    State(state): State<AppState<R>>,
    body: Result<Json<DonateRequest>, JsonRejection>,
) -> Result<Json<DonateBody>, ApiError> {
    let Json(req) = body?;
    let category_id = req
        .category_id
        .map(|raw| DonateCategoryId::parse(&raw.into_text()))
        .transpose()?;
    let receipt = state
        .points_service
        .donate(DonationRequest {
            category_id,
            amount: req.amount,
        })
        .await?;
    Ok(Json(DonateBody {
        message: "Donation successful",
        category: receipt.category,
        amount: receipt.amount,
        remaining_points: receipt.remaining_points,
        total_donated: receipt.total_donated,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocampus_domain::error::ValidationError;

    #[test]
    fn should_accept_numeric_and_text_item_ids() {
        let numeric: ExchangeRequest = serde_json::from_str(r#"{"itemId": 3}"#).unwrap();
        let text: ExchangeRequest =
            serde_json::from_str(r#"{"itemId": "3", "category": "gifticon"}"#).unwrap();
        assert_eq!(numeric.item_id.unwrap().into_text(), "3");
        assert_eq!(numeric.category, "voucher");
        assert_eq!(text.item_id.unwrap().into_text(), "3");
        assert_eq!(text.category, "gifticon");
    }

    #[test]
    fn should_default_donation_amount_to_zero() {
        let req: DonateRequest = serde_json::from_str(r#"{"categoryId": 1}"#).unwrap();
        assert_eq!(req.amount, 0);
        assert!(matches!(req.category_id, Some(RawId::Integer(1))));
    }

    #[test]
    fn should_truncate_fractional_amounts_and_ids() {
        let req: DonateRequest =
            serde_json::from_str(r#"{"categoryId": 1.5, "amount": 100.5}"#).unwrap();
        assert_eq!(req.amount, 100);
        assert_eq!(req.category_id.unwrap().into_text(), "1");
    }

    #[test]
    fn should_fail_to_parse_text_amount() {
        assert!(serde_json::from_str::<DonateRequest>(r#"{"amount": "abc"}"#).is_err());
    }

    #[test]
    fn should_reject_missing_item_id_as_invalid() {
        let err = ExchangeItemId::parse("").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidId { entity: "item", .. }));
    }
}
