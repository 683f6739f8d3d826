//! Supply DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Supply, SupplyDraft, SupplyQuery, SupplySortKey};
use crate::interfaces::http::common::sort_from;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub supply_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    pub outstanding: i64,
    pub received_by: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supply> for SupplyResponse {
    fn from(s: Supply) -> Self {
        Self {
            outstanding: s.outstanding(),
            id: s.id,
            supplier_id: s.supplier_id,
            supply_date: s.supply_date,
            total_due: s.total_due,
            total_paid: s.total_paid,
            received_by: s.received_by,
            comment: s.comment,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequest {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    pub supply_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub total_due: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_paid: i64,
    #[validate(length(max = 150))]
    pub received_by: Option<String>,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

impl From<SupplyRequest> for SupplyDraft {
    fn from(r: SupplyRequest) -> Self {
        Self {
            supplier_id: r.supplier_id,
            supply_date: r.supply_date,
            total_due: r.total_due,
            total_paid: r.total_paid,
            received_by: r.received_by,
            comment: r.comment,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SupplyFilter {
    pub supplier_id: Option<i32>,
    /// Deliveries on or after this instant (RFC 3339)
    pub from: Option<DateTime<Utc>>,
    /// Deliveries strictly before this instant (RFC 3339)
    pub to: Option<DateTime<Utc>>,
    #[param(inline)]
    pub order_by: Option<SupplySortKey>,
    pub descending: Option<bool>,
}

impl From<SupplyFilter> for SupplyQuery {
    fn from(f: SupplyFilter) -> Self {
        Self {
            supplier_id: f.supplier_id,
            from: f.from,
            to: f.to,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
