//! One repository implementation shared by every aggregate.
//!
//! The per-entity parts (domain conversion, column writes, filters and
//! default ordering) live in an [`EntityMapping`] impl next to each entity's
//! repository module. Everything else is here.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
};
use tracing::debug;

use super::paginate::SelectSource;
use crate::domain::{Repository, Resource};
use crate::shared::{paginate, DomainError, DomainResult, PageRequest, PaginatedList};

type DraftOf<E> = <<E as EntityMapping>::Resource as Resource>::Draft;
type QueryOf<E> = <<E as EntityMapping>::Resource as Resource>::Query;

/// Ties a SeaORM entity to the domain aggregate it stores.
pub trait EntityMapping: EntityTrait {
    type Resource: Resource;

    const CREATED_AT: Self::Column;
    const UPDATED_AT: Self::Column;

    fn to_domain(model: Self::Model) -> Self::Resource;

    /// Set every writable column from `draft`.
    fn write_draft(active: &mut Self::ActiveModel, draft: DraftOf<Self>);

    /// Predicates from the query, ANDed together.
    fn filter(query: &QueryOf<Self>) -> Condition;

    /// Sort keys for the query, falling back to the entity's default key.
    /// The primary key tiebreaker is added by the pager.
    fn order(query: &QueryOf<Self>) -> Vec<(Self::Column, Order)>;
}

pub(crate) fn direction(descending: bool) -> Order {
    if descending {
        Order::Desc
    } else {
        Order::Asc
    }
}

pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

fn stamp<A: ActiveModelTrait>(active: &mut A, column: <A::Entity as EntityTrait>::Column, now: DateTime<Utc>) {
    active.set(column, now.into());
}

#[async_trait]
impl<E> Repository<E::Resource> for SeaOrmRepository<E>
where
    E: EntityMapping,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn find_page(
        &self,
        query: &QueryOf<E>,
        page: PageRequest,
    ) -> DomainResult<PaginatedList<E::Resource>> {
        let select = E::find().filter(E::filter(query));
        let source = SelectSource::new(&self.db, select, E::order(query));
        let list = paginate(&source, page).await?;
        Ok(list.map(E::to_domain))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<E::Resource>> {
        let model = E::find_by_id(id).one(&self.db).await?;
        Ok(model.map(E::to_domain))
    }

    async fn exists(&self, id: i32) -> DomainResult<bool> {
        Ok(E::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn create(&self, draft: DraftOf<E>) -> DomainResult<E::Resource> {
        let now = Utc::now();
        let mut active = <E::ActiveModel as ActiveModelBehavior>::new();
        E::write_draft(&mut active, draft);
        stamp(&mut active, E::CREATED_AT, now);
        stamp(&mut active, E::UPDATED_AT, now);

        let model = active.insert(&self.db).await?;
        let created = E::to_domain(model);
        debug!(entity = E::Resource::NAME, id = created.id(), "Created");
        Ok(created)
    }

    async fn update(&self, id: i32, draft: DraftOf<E>) -> DomainResult<E::Resource> {
        let existing = E::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(E::Resource::NAME, id))?;

        let mut active: E::ActiveModel = existing.into_active_model();
        E::write_draft(&mut active, draft);
        stamp(&mut active, E::UPDATED_AT, Utc::now());

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found(E::Resource::NAME, id),
            other => other.into(),
        })?;
        debug!(entity = E::Resource::NAME, id, "Updated");
        Ok(E::to_domain(model))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(E::Resource::NAME, id));
        }
        debug!(entity = E::Resource::NAME, id, "Deleted");
        Ok(())
    }
}
