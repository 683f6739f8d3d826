//! Product category aggregate
//!
//! Categories form a tree through the optional `parent_id`.

pub mod model;

pub use model::{Category, CategoryDraft, CategoryQuery, CategorySortKey};
