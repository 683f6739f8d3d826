//! Sale DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Sale, SaleDraft, SaleQuery, SaleSortKey, SaleStatus, SaleType};
use crate::interfaces::http::common::sort_from;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: i32,
    pub receipt: String,
    pub comment: Option<String>,
    pub sale_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    /// `totalDue - totalPaid`, never negative
    pub balance_due: i64,
    pub discount_percentage: f64,
    pub discount: i64,
    pub sale_type: SaleType,
    pub status: SaleStatus,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sale> for SaleResponse {
    fn from(s: Sale) -> Self {
        Self {
            balance_due: s.balance_due(),
            id: s.id,
            receipt: s.receipt,
            comment: s.comment,
            sale_date: s.sale_date,
            total_due: s.total_due,
            total_paid: s.total_paid,
            discount_percentage: s.discount_percentage,
            discount: s.discount,
            sale_type: s.sale_type,
            status: s.status,
            customer_id: s.customer_id,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    #[validate(length(min = 1, max = 64))]
    pub receipt: String,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
    pub sale_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub total_due: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_paid: i64,
    /// Percentage off the whole sale. Default: 0
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "discount percentage must be between 0 and 100"))]
    pub discount_percentage: f64,
    /// Flat discount in minor units. Default: 0
    #[serde(default)]
    #[validate(range(min = 0))]
    pub discount: i64,
    #[serde(default)]
    pub sale_type: SaleType,
    #[serde(default)]
    pub status: SaleStatus,
    #[validate(range(min = 1))]
    pub customer_id: i32,
}

impl From<SaleRequest> for SaleDraft {
    fn from(r: SaleRequest) -> Self {
        Self {
            receipt: r.receipt,
            comment: r.comment,
            sale_date: r.sale_date,
            total_due: r.total_due,
            total_paid: r.total_paid,
            discount_percentage: r.discount_percentage,
            discount: r.discount,
            sale_type: r.sale_type,
            status: r.status,
            customer_id: r.customer_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SaleFilter {
    pub customer_id: Option<i32>,
    #[param(inline)]
    pub status: Option<SaleStatus>,
    #[param(inline)]
    pub sale_type: Option<SaleType>,
    /// Sales on or after this instant (RFC 3339)
    pub from: Option<DateTime<Utc>>,
    /// Sales strictly before this instant (RFC 3339)
    pub to: Option<DateTime<Utc>>,
    pub min_total_due: Option<i64>,
    #[param(inline)]
    pub order_by: Option<SaleSortKey>,
    pub descending: Option<bool>,
}

impl From<SaleFilter> for SaleQuery {
    fn from(f: SaleFilter) -> Self {
        Self {
            customer_id: f.customer_id,
            status: f.status,
            sale_type: f.sale_type,
            from: f.from,
            to: f.to,
            min_total_due: f.min_total_due,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
