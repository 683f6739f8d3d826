//! `/api/v1/categories`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
