//! Supply detail storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{LineSortKey, SupplyDetail, SupplyDetailDraft, SupplyDetailQuery};
use crate::infrastructure::database::entities::supply_detail::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = SupplyDetail;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: supply_detail::Model) -> SupplyDetail {
        SupplyDetail {
            id: m.id,
            supply_id: m.supply_id,
            product_id: m.product_id,
            quantity: m.quantity,
            unit_price: m.unit_price,
            unit_price_discount: m.unit_price_discount,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SupplyDetailDraft) {
        active.supply_id = Set(draft.supply_id);
        active.product_id = Set(draft.product_id);
        active.quantity = Set(draft.quantity);
        active.unit_price = Set(draft.unit_price);
        active.unit_price_discount = Set(draft.unit_price_discount);
    }

    fn filter(query: &SupplyDetailQuery) -> Condition {
        Condition::all()
            .add_option(query.supply_id.map(|id| Column::SupplyId.eq(id)))
            .add_option(query.product_id.map(|id| Column::ProductId.eq(id)))
    }

    fn order(query: &SupplyDetailQuery) -> Vec<(Column, Order)> {
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
