//! Category storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{Category, CategoryDraft, CategoryQuery, CategorySortKey};
use crate::infrastructure::database::entities::category::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = Category;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: category::Model) -> Category {
        Category {
            id: m.id,
            category_name: m.category_name,
            description: m.description,
            parent_id: m.parent_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: CategoryDraft) {
        active.category_name = Set(draft.category_name);
        active.description = Set(draft.description);
        active.parent_id = Set(draft.parent_id);
    }

    fn filter(query: &CategoryQuery) -> Condition {
        let mut cond = Condition::all()
            .add_option(query.search.as_deref().map(|s| Column::CategoryName.contains(s)))
            .add_option(query.parent_id.map(|id| Column::ParentId.eq(id)));
        if query.roots_only {
            cond = cond.add(Column::ParentId.is_null());
        }
        cond
    }

    fn order(query: &CategoryQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    CategorySortKey::CategoryName => Column::CategoryName,
                    CategorySortKey::CreatedAt => Column::CreatedAt,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::CategoryName, Order::Asc)],
        }
    }
}
