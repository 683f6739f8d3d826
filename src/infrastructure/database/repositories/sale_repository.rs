//! Sale storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{Sale, SaleDraft, SaleQuery, SaleSortKey};
use crate::infrastructure::database::entities::sale::{
    self, ActiveModel, Column, Entity, SaleStatusDb, SaleTypeDb,
};

impl EntityMapping for Entity {
    type Resource = Sale;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: sale::Model) -> Sale {
        Sale {
            id: m.id,
            receipt: m.receipt,
            comment: m.comment,
            sale_date: m.sale_date,
            total_due: m.total_due,
            total_paid: m.total_paid,
            discount_percentage: m.discount_percentage,
            discount: m.discount,
            sale_type: m.sale_type.into(),
            status: m.status.into(),
            customer_id: m.customer_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SaleDraft) {
        active.receipt = Set(draft.receipt);
        active.comment = Set(draft.comment);
        active.sale_date = Set(draft.sale_date);
        active.total_due = Set(draft.total_due);
        active.total_paid = Set(draft.total_paid);
        active.discount_percentage = Set(draft.discount_percentage);
        active.discount = Set(draft.discount);
        active.sale_type = Set(draft.sale_type.into());
        active.status = Set(draft.status.into());
        active.customer_id = Set(draft.customer_id);
    }

    fn filter(query: &SaleQuery) -> Condition {
        Condition::all()
            .add_option(query.customer_id.map(|id| Column::CustomerId.eq(id)))
            .add_option(
                query
                    .status
                    .map(|status| Column::Status.eq(SaleStatusDb::from(status))),
            )
            .add_option(
                query
                    .sale_type
                    .map(|sale_type| Column::SaleType.eq(SaleTypeDb::from(sale_type))),
            )
            .add_option(query.from.map(|from| Column::SaleDate.gte(from)))
            .add_option(query.to.map(|to| Column::SaleDate.lt(to)))
            .add_option(query.min_total_due.map(|min| Column::TotalDue.gte(min)))
    }

    fn order(query: &SaleQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    SaleSortKey::SaleDate => Column::SaleDate,
                    SaleSortKey::TotalDue => Column::TotalDue,
                    SaleSortKey::Receipt => Column::Receipt,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::SaleDate, Order::Desc)],
        }
    }
}
