//! Supplier storage mapping

use sea_orm::{ColumnTrait, Condition, Order, Set};

use super::generic::{direction, EntityMapping};
use crate::domain::{Supplier, SupplierDraft, SupplierQuery, SupplierSortKey};
use crate::infrastructure::database::entities::supplier::{self, ActiveModel, Column, Entity};

impl EntityMapping for Entity {
    type Resource = Supplier;

    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;

    fn to_domain(m: supplier::Model) -> Supplier {
        Supplier {
            id: m.id,
            full_name: m.full_name,
            company: m.company,
            phone_number: m.phone_number,
            balance: m.balance,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }

    fn write_draft(active: &mut ActiveModel, draft: SupplierDraft) {
        active.full_name = Set(draft.full_name);
        active.company = Set(draft.company);
        active.phone_number = Set(draft.phone_number);
        active.balance = Set(draft.balance);
        active.is_active = Set(draft.is_active);
    }

    fn filter(query: &SupplierQuery) -> Condition {
        Condition::all()
            .add_option(query.search.as_deref().map(|s| {
                Condition::any()
                    .add(Column::FullName.contains(s))
                    .add(Column::Company.contains(s))
            }))
            .add_option(query.is_active.map(|active| Column::IsActive.eq(active)))
    }

    fn order(query: &SupplierQuery) -> Vec<(Column, Order)> {
        match query.sort {
            Some(sort) => {
                let column = match sort.key {
                    SupplierSortKey::FullName => Column::FullName,
                    SupplierSortKey::Company => Column::Company,
                    SupplierSortKey::Balance => Column::Balance,
                };
                vec![(column, direction(sort.descending))]
            }
            None => vec![(Column::FullName, Order::Asc)],
        }
    }
}
