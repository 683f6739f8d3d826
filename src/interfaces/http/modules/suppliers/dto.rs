//! Supplier DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Supplier, SupplierDraft, SupplierQuery, SupplierSortKey};
use crate::interfaces::http::common::sort_from;

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: i32,
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub balance: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            full_name: s.full_name,
            company: s.company,
            phone_number: s.phone_number,
            balance: s.balance,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    #[validate(length(min = 1, max = 150))]
    pub full_name: String,
    #[validate(length(max = 150))]
    pub company: Option<String>,
    #[validate(length(min = 3, max = 32))]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub balance: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<SupplierRequest> for SupplierDraft {
    fn from(r: SupplierRequest) -> Self {
        Self {
            full_name: r.full_name,
            company: r.company,
            phone_number: r.phone_number,
            balance: r.balance,
            is_active: r.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SupplierFilter {
    /// Substring of the name or company
    pub search: Option<String>,
    pub is_active: Option<bool>,
    #[param(inline)]
    pub order_by: Option<SupplierSortKey>,
    pub descending: Option<bool>,
}

impl From<SupplierFilter> for SupplierQuery {
    fn from(f: SupplierFilter) -> Self {
        Self {
            search: f.search.filter(|s| !s.trim().is_empty()),
            is_active: f.is_active,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
