//! # Reverse Analytics
//!
//! Inventory and sales REST API. Every collection endpoint is paginated: the
//! body is the page's items and the `X-Pagination` header describes where the
//! page sits in the filtered result set.
//!
//! - **shared**: pagination core, domain errors, shutdown coordination
//! - **domain**: aggregates, drafts, list queries and the repository traits
//! - **infrastructure**: SeaORM entities, migrations and the generic repository
//! - **interfaces**: axum handlers, router and OpenAPI document
//! - **config** / **server**: TOML configuration and process lifecycle

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::create_api_router;
pub use shared::{PaginatedList, PaginationMetaData, PaginationParams};
