//! Supply REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{SupplyFilter, SupplyRequest, SupplyResponse};
use crate::domain::{SupplyDraft, SupplyQuery};
use crate::interfaces::http::common::{
    require_found, require_reference, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/v1/supplies",
    tag = "Supplies",
    params(PaginationParams, SupplyFilter),
    responses(
        (status = 200, description = "One page of supplies, newest first", body = Vec<SupplyResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_supplies(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<SupplyFilter>,
) -> Result<Paginated<SupplyResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .supplies()
        .find_page(&SupplyQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(SupplyResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/supplies/{id}",
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply ID")),
    responses(
        (status = 200, description = "Supply details", body = SupplyResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_supply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SupplyResponse>, ApiError> {
    let supply = state.repos.supplies().get(id).await?;
    Ok(Json(supply.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/supplies",
    tag = "Supplies",
    request_body = SupplyRequest,
    responses(
        (status = 201, description = "Created", body = SupplyResponse),
        (status = 422, description = "Validation failed or unknown supplier", body = ApiResponse<String>)
    )
)]
pub async fn create_supply(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SupplyRequest>,
) -> Result<(StatusCode, Json<SupplyResponse>), ApiError> {
    require_reference(state.repos.suppliers(), "supplierId", req.supplier_id).await?;
    let created = state.repos.supplies().create(SupplyDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/supplies/{id}",
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply ID")),
    request_body = SupplyRequest,
    responses(
        (status = 200, description = "Updated", body = SupplyResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown supplier", body = ApiResponse<String>)
    )
)]
pub async fn update_supply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SupplyRequest>,
) -> Result<Json<SupplyResponse>, ApiError> {
    require_found(state.repos.supplies(), id).await?;
    require_reference(state.repos.suppliers(), "supplierId", req.supplier_id).await?;
    let updated = state.repos.supplies().update(id, SupplyDraft::from(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/supplies/{id}",
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_supply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.supplies().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
