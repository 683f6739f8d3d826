use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::repository::{Resource, Sort};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub category_name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Resource for Category {
    const NAME: &'static str = "Category";
    type Draft = CategoryDraft;
    type Query = CategoryQuery;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub category_name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
}

impl From<Category> for CategoryDraft {
    fn from(c: Category) -> Self {
        Self {
            category_name: c.category_name,
            description: c.description,
            parent_id: c.parent_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CategorySortKey {
    CategoryName,
    CreatedAt,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    /// Case-insensitive substring of the category name.
    pub search: Option<String>,
    pub parent_id: Option<i32>,
    /// Only categories without a parent.
    pub roots_only: bool,
    pub sort: Option<Sort<CategorySortKey>>,
}

impl CategoryQuery {
    pub fn children_of(parent_id: i32) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Default::default()
        }
    }
}
