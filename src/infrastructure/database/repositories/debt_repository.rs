//! Sale debt storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{DebtQuery, DebtSortKey, SaleDebt, SaleDebtDraft};
use crate::infrastructure::database::entities::sale_debt::{self, ActiveModel, Column, DebtStatusDb, Entity};

impl EntityMapping for Entity {
    type Resource = SaleDebt;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: sale_debt::Model) -> SaleDebt {
        SaleDebt {
            id: m.id,
            sale_id: m.sale_id,
            total_due: m.total_due,
            total_paid: m.total_paid,
            debt_date: m.debt_date,
            closed_date: m.closed_date,
            status: m.status.into(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SaleDebtDraft) {
        active.sale_id = Set(draft.sale_id);
        active.total_due = Set(draft.total_due);
        active.total_paid = Set(draft.total_paid);
        active.debt_date = Set(draft.debt_date);
        active.closed_date = Set(draft.closed_date);
        active.status = Set(draft.status.into());
    }

    fn filter(query: &DebtQuery) -> Condition {
        Condition::all()
            .add_option(query.sale_id.map(|id| Column::SaleId.eq(id)))
            .add_option(
                query
                    .status
                    .map(|status| Column::Status.eq(DebtStatusDb::from(status))),
            )
    }

    fn order(query: &DebtQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    DebtSortKey::DebtDate => Column::DebtDate,
                    DebtSortKey::TotalDue => Column::TotalDue,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::DebtDate, Order::Desc)],
        }
    }
}
