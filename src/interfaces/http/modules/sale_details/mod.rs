//! Product lines of a sale, nested under `/api/v1/sales/{id}/details`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
