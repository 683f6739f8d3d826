use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    /// Amount owed to the supplier in the smallest currency unit.
    pub balance: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Supplier {
    const NAME: &'static str = "Supplier";
    type Draft = SupplierDraft;
    type Query = SupplierQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDraft {
    pub full_name: String,
    pub company: Option<String>,
    pub phone_number: Option<String>,
    pub balance: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SupplierSortKey {
    FullName,
    Company,
    Balance,
}

#[derive(Debug, Clone, Default)]
pub struct SupplierQuery {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub sort: Option<Sort<SupplierSortKey>>,
}
