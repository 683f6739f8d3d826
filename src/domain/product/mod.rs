//! Product aggregate

pub mod model;

pub use model::{Product, ProductDraft, ProductQuery, ProductSortKey};
