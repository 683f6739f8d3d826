//! Checks that ids referenced from a request body exist.

use super::ApiError;
use crate::domain::{Repository, Resource};
use crate::shared::DomainError;

/// Fails with a 422 naming `field` when `id` is unknown to `repo`.
pub async fn require_reference<R: Resource>(
    repo: &dyn Repository<R>,
    field: &str,
    id: i32,
) -> Result<(), ApiError> {
    if repo.exists(id).await? {
        Ok(())
    } else {
        Err(DomainError::Validation(format!("{}: {} {} does not exist", field, R::NAME, id)).into())
    }
}

/// Fails with a 404 when the resource addressed by the path is unknown.
pub async fn require_found<R: Resource>(repo: &dyn Repository<R>, id: i32) -> Result<(), ApiError> {
    if repo.exists(id).await? {
        Ok(())
    } else {
        Err(DomainError::not_found(R::NAME, id).into())
    }
}
