//! Repository traits for the domain layer
//!
//! Every aggregate goes through the same [`Repository`] contract. The
//! per-aggregate differences (input shape, filter shape) are carried by the
//! associated types of [`Resource`].

use async_trait::async_trait;

use super::category::Category;
use super::customer::Customer;
use super::debt::SaleDebt;
use super::product::Product;
use super::sale::{Sale, SaleDetail};
use super::supplier::Supplier;
use super::supply::{Supply, SupplyDetail};
use crate::shared::{DomainError, DomainResult, PageRequest, PaginatedList};

/// A persisted aggregate addressed by an integer id.
pub trait Resource: Send + Sync + Sized + 'static {
    /// Human readable name used in error messages.
    const NAME: &'static str;

    /// Full set of writable fields, used for both create and replace.
    type Draft: Send + 'static;

    /// Filter and ordering for list queries.
    type Query: Send + Sync + 'static;

    fn id(&self) -> i32;
}

/// Ordering requested by a caller. The primary key is always appended as a
/// final tiebreaker by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K> {
    pub key: K,
    pub descending: bool,
}

impl<K> Sort<K> {
    pub fn asc(key: K) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    pub fn desc(key: K) -> Self {
        Self {
            key,
            descending: true,
        }
    }
}

#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn find_page(&self, query: &R::Query, page: PageRequest)
        -> DomainResult<PaginatedList<R>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<R>>;

    async fn exists(&self, id: i32) -> DomainResult<bool>;

    async fn create(&self, draft: R::Draft) -> DomainResult<R>;

    /// Replace every writable field. Fails with `NotFound` if `id` is unknown.
    async fn update(&self, id: i32, draft: R::Draft) -> DomainResult<R>;

    /// Fails with `NotFound` if `id` is unknown.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Like [`find_by_id`](Self::find_by_id) but a missing row is an error.
    async fn get(&self, id: i32) -> DomainResult<R> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(R::NAME, id))
    }
}

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) -> DomainResult<()> {
///     let category = repos.categories().get(3).await?;
///     let page = repos.products().find_page(&query, PageRequest::default()).await?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn categories(&self) -> &dyn Repository<Category>;
    fn products(&self) -> &dyn Repository<Product>;
    fn customers(&self) -> &dyn Repository<Customer>;
    fn suppliers(&self) -> &dyn Repository<Supplier>;
    fn supplies(&self) -> &dyn Repository<Supply>;
    fn sales(&self) -> &dyn Repository<Sale>;
    fn debts(&self) -> &dyn Repository<SaleDebt>;
    fn sale_details(&self) -> &dyn Repository<SaleDetail>;
    fn supply_details(&self) -> &dyn Repository<SupplyDetail>;
}
