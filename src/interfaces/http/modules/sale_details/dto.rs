//! Sale detail DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{LineSortKey, SaleDetail, SaleDetailDraft, SaleDetailQuery};
use crate::interfaces::http::common::sort_from;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailResponse {
    pub id: i32,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub discount: i64,
    /// `quantity * unitPrice - discount`, never negative
    pub line_total: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SaleDetail> for SaleDetailResponse {
    fn from(d: SaleDetail) -> Self {
        Self {
            line_total: d.line_total(),
            id: d.id,
            sale_id: d.sale_id,
            product_id: d.product_id,
            quantity: d.quantity,
            unit_price: d.unit_price,
            discount: d.discount,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// The owning sale comes from the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleDetailRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub unit_price: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub discount: i64,
}

impl SaleDetailRequest {
    pub fn into_draft(self, sale_id: i32) -> SaleDetailDraft {
        SaleDetailDraft {
            sale_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount: self.discount,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LineFilter {
    pub product_id: Option<i32>,
    #[param(inline)]
    pub order_by: Option<LineSortKey>,
    pub descending: Option<bool>,
}

impl LineFilter {
    pub fn for_sale(self, sale_id: i32) -> SaleDetailQuery {
        SaleDetailQuery {
            sale_id: Some(sale_id),
            product_id: self.product_id,
            sort: sort_from(self.order_by, self.descending),
        }
    }
}
