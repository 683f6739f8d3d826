use chrono::{DateTime, Utc};

use crate::domain::repository::{Resource, Sort};
use crate::domain::sale::LineSortKey;

/// One product line of a delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDetail {
    pub id: i32,
    pub supply_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    /// Reduction applied to each unit
    pub unit_price_discount: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplyDetail {
    /// Unit price after the per-unit discount, never negative.
    pub fn net_unit_price(&self) -> i64 {
        (self.unit_price - self.unit_price_discount.unwrap_or(0)).max(0)
    }

    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity).saturating_mul(self.net_unit_price())
    }
}

impl Resource for SupplyDetail {
    const NAME: &'static str = "SupplyDetail";
    type Draft = SupplyDetailDraft;
    type Query = SupplyDetailQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyDetailDraft {
    pub supply_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub unit_price_discount: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct SupplyDetailQuery {
    pub supply_id: Option<i32>,
    pub product_id: Option<i32>,
    pub sort: Option<Sort<LineSortKey>>,
}

impl SupplyDetailQuery {
    pub fn for_supply(supply_id: i32) -> Self {
        Self {
            supply_id: Some(supply_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_applies_per_unit() {
        let now = Utc::now();
        let mut line = SupplyDetail {
            id: 1,
            supply_id: 1,
            product_id: 1,
            quantity: 4,
            unit_price: 1_000,
            unit_price_discount: Some(150),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(line.net_unit_price(), 850);
        assert_eq!(line.line_total(), 3_400);

        line.unit_price_discount = None;
        assert_eq!(line.line_total(), 4_000);

        line.unit_price_discount = Some(2_000);
        assert_eq!(line.line_total(), 0);
    }
}
