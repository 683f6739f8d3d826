//! HTTP REST API interfaces
//!
//! - `common`: error envelope, extractors and the paged list response
//! - `modules`: one module per resource plus health, metrics and request ids
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::{ApiState, AppState};

#[cfg(test)]
mod tests;
