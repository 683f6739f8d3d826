//! Customer DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Customer, CustomerDraft, CustomerQuery, CustomerSortKey};
use crate::interfaces::http::common::{sort_from, FieldPatch};

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i32,
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub balance: i64,
    pub discount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            company: c.company,
            phone_number: c.phone_number,
            address: c.address,
            balance: c.balance,
            discount: c.discount,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 150))]
    pub full_name: String,
    #[validate(length(max = 150))]
    pub company: Option<String>,
    #[validate(length(min = 3, max = 32))]
    pub phone_number: Option<String>,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "discount must be between 0 and 100"))]
    pub discount: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CustomerRequest> for CustomerDraft {
    fn from(r: CustomerRequest) -> Self {
        Self {
            full_name: r.full_name,
            company: r.company,
            phone_number: r.phone_number,
            address: r.address,
            balance: r.balance,
            discount: r.discount,
            is_active: r.is_active,
        }
    }
}

impl From<Customer> for CustomerRequest {
    fn from(c: Customer) -> Self {
        Self {
            full_name: c.full_name,
            company: c.company,
            phone_number: c.phone_number,
            address: c.address,
            balance: c.balance,
            discount: c.discount,
            is_active: c.is_active,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum CustomerPatch {
    FullName(String),
    Company(Option<String>),
    PhoneNumber(Option<String>),
    Address(Option<String>),
    Balance(i64),
    Discount(f64),
    IsActive(bool),
}

impl FieldPatch<CustomerRequest> for CustomerPatch {
    fn apply(self, target: &mut CustomerRequest) {
        match self {
            CustomerPatch::FullName(v) => target.full_name = v,
            CustomerPatch::Company(v) => target.company = v,
            CustomerPatch::PhoneNumber(v) => target.phone_number = v,
            CustomerPatch::Address(v) => target.address = v,
            CustomerPatch::Balance(v) => target.balance = v,
            CustomerPatch::Discount(v) => target.discount = v,
            CustomerPatch::IsActive(v) => target.is_active = v,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerFilter {
    /// Substring of the name or company
    pub search: Option<String>,
    pub is_active: Option<bool>,
    #[param(inline)]
    pub order_by: Option<CustomerSortKey>,
    pub descending: Option<bool>,
}

impl From<CustomerFilter> for CustomerQuery {
    fn from(f: CustomerFilter) -> Self {
        Self {
            search: f.search.filter(|s| !s.trim().is_empty()),
            is_active: f.is_active,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
