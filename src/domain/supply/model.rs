use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, PartialEq)]
pub struct Supply {
    pub id: i32,
    pub supplier_id: i32,
    pub supply_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    pub received_by: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supply {
    pub fn outstanding(&self) -> i64 {
        (self.total_due - self.total_paid).max(0)
    }
}

impl Resource for Supply {
    const NAME: &'static str = "Supply";
    type Draft = SupplyDraft;
    type Query = SupplyQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDraft {
    pub supplier_id: i32,
    pub supply_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    pub received_by: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SupplySortKey {
    SupplyDate,
    TotalDue,
}

#[derive(Debug, Clone, Default)]
pub struct SupplyQuery {
    pub supplier_id: Option<i32>,
    /// Inclusive lower bound on `supply_date`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `supply_date`.
    pub to: Option<DateTime<Utc>>,
    pub sort: Option<Sort<SupplySortKey>>,
}

impl SupplyQuery {
    pub fn from_supplier(supplier_id: i32) -> Self {
        Self {
            supplier_id: Some(supplier_id),
            ..Default::default()
        }
    }
}
