//! Sale detail storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{LineSortKey, SaleDetail, SaleDetailDraft, SaleDetailQuery};
use crate::infrastructure::database::entities::sale_detail::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = SaleDetail;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: sale_detail::Model) -> SaleDetail {
        SaleDetail {
            id: m.id,
            sale_id: m.sale_id,
            product_id: m.product_id,
            quantity: m.quantity,
            unit_price: m.unit_price,
            discount: m.discount,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SaleDetailDraft) {
        active.sale_id = Set(draft.sale_id);
        active.product_id = Set(draft.product_id);
        active.quantity = Set(draft.quantity);
        active.unit_price = Set(draft.unit_price);
        active.discount = Set(draft.discount);
    }

    fn filter(query: &SaleDetailQuery) -> Condition {
        Condition::all()
            .add_option(query.sale_id.map(|id| Column::SaleId.eq(id)))
            .add_option(query.product_id.map(|id| Column::ProductId.eq(id)))
    }

    // Insertion order (primary key) unless asked otherwise.
    fn order(query: &SaleDetailQuery) -> Vec<(Column, Order)> {
        query
            .sort
            .map(|sort| {
                let column = match sort.key {
                    LineSortKey::Quantity => Column::Quantity,
                    LineSortKey::UnitPrice => Column::UnitPrice,
                };
                vec![(column, direction(sort.descending))]
            })
            .unwrap_or_default()
    }
}
