//! Supply storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{Supply, SupplyDraft, SupplyQuery, SupplySortKey};
use crate::infrastructure::database::entities::supply::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = Supply;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: supply::Model) -> Supply {
        Supply {
            id: m.id,
            supplier_id: m.supplier_id,
            supply_date: m.supply_date,
            total_due: m.total_due,
            total_paid: m.total_paid,
            received_by: m.received_by,
            comment: m.comment,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SupplyDraft) {
        active.supplier_id = Set(draft.supplier_id);
        active.supply_date = Set(draft.supply_date);
        active.total_due = Set(draft.total_due);
        active.total_paid = Set(draft.total_paid);
        active.received_by = Set(draft.received_by);
        active.comment = Set(draft.comment);
    }

    fn filter(query: &SupplyQuery) -> Condition {
        Condition::all()
            .add_option(query.supplier_id.map(|id| Column::SupplierId.eq(id)))
            .add_option(query.from.map(|from| Column::SupplyDate.gte(from)))
            .add_option(query.to.map(|to| Column::SupplyDate.lt(to)))
    }

    fn order(query: &SupplyQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    SupplySortKey::SupplyDate => Column::SupplyDate,
                    SupplySortKey::TotalDue => Column::TotalDue,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::SupplyDate, Order::Desc)],
        }
    }
}
