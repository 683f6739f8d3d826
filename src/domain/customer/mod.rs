//! Customer aggregate

pub mod model;

pub use model::{Customer, CustomerDraft, CustomerQuery, CustomerSortKey};
