use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

/// One product line of a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDetail {
    pub id: i32,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Price of one unit in minor units
    pub unit_price: i64,
    /// Flat discount on the whole line in minor units
    pub discount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaleDetail {
    /// `quantity * unit_price - discount`, never negative.
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity)
            .saturating_mul(self.unit_price)
            .saturating_sub(self.discount)
            .max(0)
    }
}

impl Resource for SaleDetail {
    const NAME: &'static str = "SaleDetail";
    type Draft = SaleDetailDraft;
    type Query = SaleDetailQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDetailDraft {
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub discount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum LineSortKey {
    Quantity,
    UnitPrice,
}

/// Without a sort, lines come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SaleDetailQuery {
    pub sale_id: Option<i32>,
    pub product_id: Option<i32>,
    pub sort: Option<Sort<LineSortKey>>,
}

impl SaleDetailQuery {
    pub fn for_sale(sale_id: i32) -> Self {
        Self {
            sale_id: Some(sale_id),
            ..Default::default()
        }
    }
}
