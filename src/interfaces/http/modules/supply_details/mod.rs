//! Product lines of a delivery, nested under `/api/v1/supplies/{id}/details`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
