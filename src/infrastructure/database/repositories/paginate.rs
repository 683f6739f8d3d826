//! SeaORM backing for [`PageSource`].

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, Iterable, Order, PaginatorTrait, PrimaryKeyToColumn,
    QueryOrder, QuerySelect, Select,
};

use crate::shared::{DomainResult, PageSource};

/// A filtered `SELECT` plus the ordering to apply when fetching a slice.
///
/// The count runs against the filtered statement without ORDER BY. The fetch
/// appends every primary key column ascending after the requested keys, so
/// rows that tie on the sort keys still come back in a stable order.
pub struct SelectSource<'a, E: EntityTrait> {
    db: &'a DatabaseConnection,
    select: Select<E>,
    order: Vec<(E::Column, Order)>,
}

impl<'a, E: EntityTrait> SelectSource<'a, E> {
    pub fn new(db: &'a DatabaseConnection, select: Select<E>, order: Vec<(E::Column, Order)>) -> Self {
        Self { db, select, order }
    }

    fn ordered(&self) -> Select<E> {
        let mut select = self.select.clone();
        for (column, order) in &self.order {
            select = select.order_by(*column, order.clone());
        }
        for key in E::PrimaryKey::iter() {
            select = select.order_by(key.into_column(), Order::Asc);
        }
        select
    }
}

#[async_trait]
impl<'a, E> PageSource for SelectSource<'a, E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    type Item = E::Model;

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.select.clone().count(self.db).await?)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> DomainResult<Vec<E::Model>> {
        Ok(self
            .ordered()
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?)
    }
}
