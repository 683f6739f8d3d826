use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

/// A sellable product. Prices are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub product_code: String,
    pub description: Option<String>,
    pub sale_price: i64,
    pub supply_price: i64,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Difference between sale and supply price. Negative when sold at a loss.
    pub fn margin(&self) -> i64 {
        self.sale_price - self.supply_price
    }
}

impl Resource for Product {
    const NAME: &'static str = "Product";
    type Draft = ProductDraft;
    type Query = ProductQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub product_name: String,
    pub product_code: String,
    pub description: Option<String>,
    pub sale_price: i64,
    pub supply_price: i64,
    pub category_id: i32,
}

impl From<Product> for ProductDraft {
    fn from(p: Product) -> Self {
        Self {
            product_name: p.product_name,
            product_code: p.product_code,
            description: p.description,
            sale_price: p.sale_price,
            supply_price: p.supply_price,
            category_id: p.category_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortKey {
    ProductName,
    ProductCode,
    SalePrice,
    CreatedAt,
}

#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Substring of the product name or code.
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<Sort<ProductSortKey>>,
}

impl ProductQuery {
    pub fn in_category(category_id: i32) -> Self {
        Self {
            category_id: Some(category_id),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_can_be_negative() {
        let now = Utc::now();
        let product = Product {
            id: 1,
            product_name: "Clearance lamp".to_string(),
            product_code: "LMP-01".to_string(),
            description: None,
            sale_price: 900,
            supply_price: 1_200,
            category_id: 1,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(product.margin(), -300);
    }
}
