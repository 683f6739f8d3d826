//! Supply detail DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{SupplyDetail, SupplyDetailDraft, SupplyDetailQuery};
use crate::interfaces::http::common::sort_from;
use crate::interfaces::http::modules::sale_details::LineFilter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyDetailResponse {
    pub id: i32,
    pub supply_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub unit_price_discount: Option<i64>,
    /// `quantity * (unitPrice - unitPriceDiscount)`, never negative
    pub line_total: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SupplyDetail> for SupplyDetailResponse {
    fn from(d: SupplyDetail) -> Self {
        Self {
            line_total: d.line_total(),
            id: d.id,
            supply_id: d.supply_id,
            product_id: d.product_id,
            quantity: d.quantity,
            unit_price: d.unit_price,
            unit_price_discount: d.unit_price_discount,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// The owning supply comes from the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyDetailRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub unit_price: i64,
    /// Taken off each unit. A discount above the price makes the line free.
    #[validate(range(min = 0))]
    pub unit_price_discount: Option<i64>,
}

impl SupplyDetailRequest {
    pub fn into_draft(self, supply_id: i32) -> SupplyDetailDraft {
        SupplyDetailDraft {
            supply_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            unit_price_discount: self.unit_price_discount,
        }
    }
}

pub fn supply_lines(filter: LineFilter, supply_id: i32) -> SupplyDetailQuery {
    SupplyDetailQuery {
        supply_id: Some(supply_id),
        product_id: filter.product_id,
        sort: sort_from(filter.order_by, filter.descending),
    }
}
