//! Supplier aggregate

pub mod model;

pub use model::{Supplier, SupplierDraft, SupplierQuery, SupplierSortKey};
