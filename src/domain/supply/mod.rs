//! Supply aggregate: a delivery received from a supplier.

pub mod detail;
pub mod model;

pub use detail::{SupplyDetail, SupplyDetailDraft, SupplyDetailQuery};
pub use model::{Supply, SupplyDraft, SupplyQuery, SupplySortKey};
