//! Sale debt DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{DebtQuery, DebtSortKey, DebtStatus, SaleDebt, SaleDebtDraft};
use crate::interfaces::http::common::sort_from;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebtResponse {
    pub id: i32,
    pub sale_id: i32,
    pub total_due: i64,
    pub total_paid: i64,
    pub remaining: i64,
    pub debt_date: DateTime<Utc>,
    pub closed_date: Option<DateTime<Utc>>,
    pub status: DebtStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SaleDebt> for DebtResponse {
    fn from(d: SaleDebt) -> Self {
        Self {
            remaining: d.remaining(),
            id: d.id,
            sale_id: d.sale_id,
            total_due: d.total_due,
            total_paid: d.total_paid,
            debt_date: d.debt_date,
            closed_date: d.closed_date,
            status: d.status,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// `closedDate` is filled in automatically when a debt is closed without one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DebtRequest {
    #[validate(range(min = 1))]
    pub sale_id: i32,
    #[validate(range(min = 0))]
    pub total_due: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_paid: i64,
    pub debt_date: DateTime<Utc>,
    pub closed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: DebtStatus,
}

impl From<DebtRequest> for SaleDebtDraft {
    fn from(r: DebtRequest) -> Self {
        Self {
            sale_id: r.sale_id,
            total_due: r.total_due,
            total_paid: r.total_paid,
            debt_date: r.debt_date,
            closed_date: r.closed_date,
            status: r.status,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DebtFilter {
    pub sale_id: Option<i32>,
    #[param(inline)]
    pub status: Option<DebtStatus>,
    #[param(inline)]
    pub order_by: Option<DebtSortKey>,
    pub descending: Option<bool>,
}

impl From<DebtFilter> for DebtQuery {
    fn from(f: DebtFilter) -> Self {
        Self {
            sale_id: f.sale_id,
            status: f.status,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
