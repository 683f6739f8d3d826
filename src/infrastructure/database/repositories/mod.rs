//! Database repository implementations
//!
//! A single generic SeaORM repository plus one [`generic::EntityMapping`]
//! impl per aggregate, exposed through the unified RepositoryProvider.

pub mod generic;
pub mod paginate;
pub mod repository_provider;

mod category_repository;
mod customer_repository;
mod debt_repository;
mod product_repository;
mod sale_detail_repository;
mod sale_repository;
mod supplier_repository;
mod supply_detail_repository;
mod supply_repository;

pub use generic::{EntityMapping, SeaOrmRepository};
pub use paginate::SelectSource;
pub use repository_provider::SeaOrmRepositoryProvider;

#[cfg(test)]
mod tests;
