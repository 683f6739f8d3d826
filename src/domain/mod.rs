//! Domain layer
//!
//! Aggregates of the inventory and sales domain plus the repository
//! contracts the storage layer implements.

pub mod category;
pub mod customer;
pub mod debt;
pub mod product;
pub mod repository;
pub mod sale;
pub mod supplier;
pub mod supply;

pub use category::{Category, CategoryDraft, CategoryQuery, CategorySortKey};
pub use customer::{Customer, CustomerDraft, CustomerQuery, CustomerSortKey};
pub use debt::{DebtQuery, DebtSortKey, DebtStatus, SaleDebt, SaleDebtDraft};
pub use product::{Product, ProductDraft, ProductQuery, ProductSortKey};
pub use repository::{Repository, RepositoryProvider, Resource, Sort};
pub use sale::{
    LineSortKey, Sale, SaleDetail, SaleDetailDraft, SaleDetailQuery, SaleDraft, SaleQuery,
    SaleSortKey, SaleStatus, SaleType,
};
pub use supplier::{Supplier, SupplierDraft, SupplierQuery, SupplierSortKey};
pub use supply::{
    Supply, SupplyDetail, SupplyDetailDraft, SupplyDetailQuery, SupplyDraft, SupplyQuery,
    SupplySortKey,
};

pub use crate::shared::errors::{DomainError, DomainResult};
