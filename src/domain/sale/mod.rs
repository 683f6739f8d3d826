//! Sale aggregate and its product lines

pub mod detail;
pub mod model;

pub use detail::{LineSortKey, SaleDetail, SaleDetailDraft, SaleDetailQuery};
pub use model::{Sale, SaleDraft, SaleQuery, SaleSortKey, SaleStatus, SaleType};
