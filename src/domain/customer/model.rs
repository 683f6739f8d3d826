use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Outstanding balance in the smallest currency unit.
    pub balance: i64,
    /// Default discount in percent, 0..=100.
    pub discount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Customer {
    const NAME: &'static str = "Customer";
    type Draft = CustomerDraft;
    type Query = CustomerQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub balance: i64,
    pub discount: f64,
    pub is_active: bool,
}

impl From<Customer> for CustomerDraft {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortKey {
    FullName,
    Balance,
    CreatedAt,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    /// Substring of the full name or company.
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub sort: Option<Sort<CustomerSortKey>>,
}
