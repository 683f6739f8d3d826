//! Supplier REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{SupplierFilter, SupplierRequest, SupplierResponse};
use crate::domain::{SupplierDraft, SupplierQuery, SupplyQuery};
use crate::interfaces::http::common::{
    require_found, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::modules::supplies::{SupplyFilter, SupplyResponse};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/v1/suppliers",
    tag = "Suppliers",
    params(PaginationParams, SupplierFilter),
    responses(
        (status = 200, description = "One page of suppliers", body = Vec<SupplierResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<SupplierFilter>,
) -> Result<Paginated<SupplierResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .suppliers()
        .find_page(&SupplierQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(SupplierResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier details", body = SupplierResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SupplierResponse>, ApiError> {
    let supplier = state.repos.suppliers().get(id).await?;
    Ok(Json(supplier.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/suppliers/{id}/supplies",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "Supplier ID"), PaginationParams, SupplyFilter),
    responses(
        (status = 200, description = "One page of deliveries from the supplier", body = Vec<SupplyResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Supplier not found", body = ApiResponse<String>)
    )
)]
pub async fn list_supplier_supplies(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<SupplyFilter>,
) -> Result<Paginated<SupplyResponse>, ApiError> {
    require_found(state.repos.suppliers(), id).await?;
    let query = SupplyQuery {
        supplier_id: Some(id),
        ..SupplyQuery::from(filter)
    };
    let page = paging.resolve(&state.pagination);
    let list = state.repos.supplies().find_page(&query, page).await?;
    Ok(Paginated(list.map(SupplyResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/v1/suppliers",
    tag = "Suppliers",
    request_body = SupplierRequest,
    responses(
        (status = 201, description = "Created", body = SupplierResponse),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SupplierRequest>,
) -> Result<(StatusCode, Json<SupplierResponse>), ApiError> {
    let created = state.repos.suppliers().create(SupplierDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Updated", body = SupplierResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SupplierRequest>,
) -> Result<Json<SupplierResponse>, ApiError> {
    let updated = state.repos.suppliers().update(id, SupplierDraft::from(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/suppliers/{id}",
    tag = "Suppliers",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 409, description = "Supplier still has supplies", body = ApiResponse<String>)
    )
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.suppliers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
