//! Shared HTTP building blocks: error envelope, extractors, paged responses

pub mod api_error;
pub mod extract;
pub mod paginated;
pub mod patch;
pub mod references;
pub mod validated_json;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use api_error::ApiError;
pub use extract::{Path, Query};
pub use paginated::Paginated;
pub use patch::{apply_patch, FieldPatch};
pub use references::{require_found, require_reference};
pub use validated_json::{JsonBody, ValidatedJson};

use crate::domain::Sort;

/// Error envelope returned by every failing endpoint.
///
/// `{"success": false, "data": null, "error": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `false` for errors
    pub success: bool,
    /// Always `null` for errors
    pub data: Option<T>,
    /// Human readable description of the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Combine the `orderBy` / `descending` query parameters.
pub fn sort_from<K>(order_by: Option<K>, descending: Option<bool>) -> Option<Sort<K>> {
    order_by.map(|key| Sort {
        key,
        descending: descending.unwrap_or(false),
    })
}
