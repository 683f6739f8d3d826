use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SaleStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Pricing channel a sale went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SaleType {
    #[default]
    Retail,
    Wholesale,
}

impl std::fmt::Display for SaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retail => write!(f, "Retail"),
            Self::Wholesale => write!(f, "Wholesale"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: i32,
    pub receipt: String,
    pub comment: Option<String>,
    pub sale_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    /// Percentage taken off the whole sale, 0 to 100
    pub discount_percentage: f64,
    /// Flat discount in minor units
    pub discount: i64,
    pub sale_type: SaleType,
    pub status: SaleStatus,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Unpaid remainder. Overpayment counts as zero.
    pub fn balance_due(&self) -> i64 {
        (self.total_due - self.total_paid).max(0)
    }

    pub fn is_paid(&self) -> bool {
        self.total_paid >= self.total_due
    }
}

impl Resource for Sale {
    const NAME: &'static str = "Sale";
    type Draft = SaleDraft;
    type Query = SaleQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDraft {
    pub receipt: String,
    pub comment: Option<String>,
    pub sale_date: DateTime<Utc>,
    pub total_due: i64,
    pub total_paid: i64,
    pub discount_percentage: f64,
    pub discount: i64,
    pub sale_type: SaleType,
    pub status: SaleStatus,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SaleSortKey {
    SaleDate,
    TotalDue,
    Receipt,
}

#[derive(Debug, Clone, Default)]
pub struct SaleQuery {
    pub customer_id: Option<i32>,
    pub status: Option<SaleStatus>,
    pub sale_type: Option<SaleType>,
    /// Inclusive lower bound on `sale_date`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `sale_date`.
    pub to: Option<DateTime<Utc>>,
    pub min_total_due: Option<i64>,
    pub sort: Option<Sort<SaleSortKey>>,
}

impl SaleQuery {
    pub fn for_customer(customer_id: i32) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sale(total_due: i64, total_paid: i64) -> Sale {
        let now = Utc::now();
        Sale {
            id: 1,
            receipt: "R-0001".to_string(),
            comment: None,
            sale_date: now,
            total_due,
            total_paid,
            discount_percentage: 0.0,
            discount: 0,
            sale_type: SaleType::Retail,
            status: SaleStatus::Pending,
            customer_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn balance_due_never_negative() {
        assert_eq!(sample_sale(10_000, 2_500).balance_due(), 7_500);
        assert_eq!(sample_sale(10_000, 12_000).balance_due(), 0);
    }

    #[test]
    fn paid_when_total_covered() {
        assert!(sample_sale(500, 500).is_paid());
        assert!(!sample_sale(500, 499).is_paid());
    }

    #[test]
    fn status_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&SaleStatus::Completed).unwrap(), "\"Completed\"");
        assert_eq!(SaleStatus::default().to_string(), "Pending");
        assert_eq!(serde_json::to_string(&SaleType::Wholesale).unwrap(), "\"Wholesale\"");
        assert_eq!(SaleType::default(), SaleType::Retail);
    }
}
