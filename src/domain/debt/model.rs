use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum DebtStatus {
    #[default]
    Open,
    Closed,
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDebt {
    pub id: i32,
    pub sale_id: i32,
    pub total_due: i64,
    pub total_paid: i64,
    pub debt_date: DateTime<Utc>,
    pub closed_date: Option<DateTime<Utc>>,
    pub status: DebtStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaleDebt {
    pub fn remaining(&self) -> i64 {
        (self.total_due - self.total_paid).max(0)
    }
}

impl Resource for SaleDebt {
    const NAME: &'static str = "SaleDebt";
    type Draft = SaleDebtDraft;
    type Query = DebtQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDebtDraft {
    pub sale_id: i32,
    pub total_due: i64,
    pub total_paid: i64,
    pub debt_date: DateTime<Utc>,
    pub closed_date: Option<DateTime<Utc>>,
    pub status: DebtStatus,
}

impl SaleDebtDraft {
    /// A debt marked closed without a close date is stamped with `now`.
    pub fn normalized(mut self, now: DateTime<Utc>) -> Self {
        match self.status {
            DebtStatus::Closed if self.closed_date.is_none() => self.closed_date = Some(now),
            DebtStatus::Open => self.closed_date = None,
            _ => {}
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DebtSortKey {
    DebtDate,
    TotalDue,
}

#[derive(Debug, Clone, Default)]
pub struct DebtQuery {
    pub sale_id: Option<i32>,
    pub status: Option<DebtStatus>,
    pub sort: Option<Sort<DebtSortKey>>,
}

impl DebtQuery {
    pub fn for_sale(sale_id: i32) -> Self {
        Self {
            sale_id: Some(sale_id),
            ..Default::default()
        }
    }
}
