//! Product storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{Product, ProductDraft, ProductQuery, ProductSortKey};
use crate::infrastructure::database::entities::product::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = Product;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: product::Model) -> Product {
        Product {
            id: m.id,
            product_name: m.product_name,
            product_code: m.product_code,
            description: m.description,
            sale_price: m.sale_price,
            supply_price: m.supply_price,
            category_id: m.category_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: ProductDraft) {
        active.product_name = Set(draft.product_name);
        active.product_code = Set(draft.product_code);
        active.description = Set(draft.description);
        active.sale_price = Set(draft.sale_price);
        active.supply_price = Set(draft.supply_price);
        active.category_id = Set(draft.category_id);
    }

    fn filter(query: &ProductQuery) -> Condition {
        Condition::all()
            .add_option(query.search.as_deref().map(|s| {
                Condition::any()
                    .add(Column::ProductName.contains(s))
                    .add(Column::ProductCode.contains(s))
            }))
            .add_option(query.category_id.map(|id| Column::CategoryId.eq(id)))
            .add_option(query.min_price.map(|p| Column::SalePrice.gte(p)))
            .add_option(query.max_price.map(|p| Column::SalePrice.lte(p)))
    }

    fn order(query: &ProductQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    ProductSortKey::ProductName => Column::ProductName,
                    ProductSortKey::ProductCode => Column::ProductCode,
                    ProductSortKey::SalePrice => Column::SalePrice,
                    ProductSortKey::CreatedAt => Column::CreatedAt,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::ProductName, Order::Asc)],
        }
    }
}
