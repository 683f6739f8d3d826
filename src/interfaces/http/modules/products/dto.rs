//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Product, ProductDraft, ProductQuery, ProductSortKey};
use crate::interfaces::http::common::{sort_from, FieldPatch};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub product_name: String,
    pub product_code: String,
    pub description: Option<String>,
    /// In the smallest currency unit
    pub sale_price: i64,
    pub supply_price: i64,
    pub margin: i64,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            margin: p.margin(),
            id: p.id,
            product_name: p.product_name,
            product_code: p.product_code,
            description: p.description,
            sale_price: p.sale_price,
            supply_price: p.supply_price,
            category_id: p.category_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub product_name: String,
    #[validate(length(min = 1, max = 50))]
    pub product_code: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub sale_price: i64,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub supply_price: i64,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

impl From<ProductRequest> for ProductDraft {
    fn from(r: ProductRequest) -> Self {
        Self {
            product_name: r.product_name,
            product_code: r.product_code,
            description: r.description,
            sale_price: r.sale_price,
            supply_price: r.supply_price,
            category_id: r.category_id,
        }
    }
}

impl From<Product> for ProductRequest {
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

#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProductPatch {
    ProductName(String),
    ProductCode(String),
    Description(Option<String>),
    SalePrice(i64),
    SupplyPrice(i64),
    CategoryId(i32),
}

impl FieldPatch<ProductRequest> for ProductPatch {
    fn apply(self, target: &mut ProductRequest) {
        match self {
            ProductPatch::ProductName(v) => target.product_name = v,
            ProductPatch::ProductCode(v) => target.product_code = v,
            ProductPatch::Description(v) => target.description = v,
            ProductPatch::SalePrice(v) => target.sale_price = v,
            ProductPatch::SupplyPrice(v) => target.supply_price = v,
            ProductPatch::CategoryId(v) => target.category_id = v,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Substring of the product name or code
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    #[param(inline)]
    pub order_by: Option<ProductSortKey>,
    pub descending: Option<bool>,
}

impl From<ProductFilter> for ProductQuery {
    fn from(f: ProductFilter) -> Self {
        Self {
            search: f.search.filter(|s| !s.trim().is_empty()),
            category_id: f.category_id,
            min_price: f.min_price,
            max_price: f.max_price,
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
