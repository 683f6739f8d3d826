//! Category DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Category, CategoryDraft, CategoryQuery, CategorySortKey};
use crate::interfaces::http::common::{sort_from, FieldPatch};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub category_name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            category_name: c.category_name,
            description: c.description,
            parent_id: c.parent_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Body of POST and PUT
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 150, message = "category name must be 1-150 characters"))]
    pub category_name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(r: CategoryRequest) -> Self {
        Self {
            category_name: r.category_name,
            description: r.description,
            parent_id: r.parent_id,
        }
    }
}

impl From<Category> for CategoryRequest {
    fn from(c: Category) -> Self {
        Self {
            category_name: c.category_name,
            description: c.description,
            parent_id: c.parent_id,
        }
    }
}

/// One PATCH operation, e.g. `{"field": "description", "value": null}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum CategoryPatch {
    CategoryName(String),
    Description(Option<String>),
    ParentId(Option<i32>),
}

impl FieldPatch<CategoryRequest> for CategoryPatch {
    fn apply(self, target: &mut CategoryRequest) {
        match self {
            CategoryPatch::CategoryName(v) => target.category_name = v,
            CategoryPatch::Description(v) => target.description = v,
            CategoryPatch::ParentId(v) => target.parent_id = v,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategoryFilter {
    /// Substring of the category name
    pub search: Option<String>,
    pub parent_id: Option<i32>,
    /// Only top-level categories
    pub roots_only: Option<bool>,
    #[param(inline)]
    pub order_by: Option<CategorySortKey>,
    pub descending: Option<bool>,
}

impl From<CategoryFilter> for CategoryQuery {
    fn from(f: CategoryFilter) -> Self {
        Self {
            search: f.search.filter(|s| !s.trim().is_empty()),
            parent_id: f.parent_id,
            roots_only: f.roots_only.unwrap_or(false),
            sort: sort_from(f.order_by, f.descending),
        }
    }
}
