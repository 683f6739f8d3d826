//! Sale debt aggregate: the unpaid part of a sale tracked until closed.

pub mod model;

pub use model::{DebtQuery, DebtSortKey, DebtStatus, SaleDebt, SaleDebtDraft};
