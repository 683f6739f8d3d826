//! Sale REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{SaleFilter, SaleRequest, SaleResponse};
use crate::domain::{DebtQuery, SaleDraft, SaleQuery};
use crate::interfaces::http::common::{
    require_found, require_reference, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::modules::debts::{DebtFilter, DebtResponse};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/v1/sales",
    tag = "Sales",
    params(PaginationParams, SaleFilter),
    responses(
        (status = 200, description = "One page of sales, newest first", body = Vec<SaleResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<SaleFilter>,
) -> Result<Paginated<SaleResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .sales()
        .find_page(&SaleQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(SaleResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale details", body = SaleResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SaleResponse>, ApiError> {
    let sale = state.repos.sales().get(id).await?;
    Ok(Json(sale.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/sales/{id}/debts",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID"), PaginationParams, DebtFilter),
    responses(
        (status = 200, description = "One page of debts recorded against the sale", body = Vec<DebtResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Sale not found", body = ApiResponse<String>)
    )
)]
pub async fn list_sale_debts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<DebtFilter>,
) -> Result<Paginated<DebtResponse>, ApiError> {
    require_found(state.repos.sales(), id).await?;
    let query = DebtQuery {
        sale_id: Some(id),
        ..DebtQuery::from(filter)
    };
    let page = paging.resolve(&state.pagination);
    let list = state.repos.debts().find_page(&query, page).await?;
    Ok(Paginated(list.map(DebtResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/v1/sales",
    tag = "Sales",
    request_body = SaleRequest,
    responses(
        (status = 201, description = "Created", body = SaleResponse),
        (status = 409, description = "Receipt already used", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown customer", body = ApiResponse<String>)
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), ApiError> {
    require_reference(state.repos.customers(), "customerId", req.customer_id).await?;
    let created = state.repos.sales().create(SaleDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = SaleRequest,
    responses(
        (status = 200, description = "Updated", body = SaleResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown customer", body = ApiResponse<String>)
    )
)]
pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SaleRequest>,
) -> Result<Json<SaleResponse>, ApiError> {
    require_found(state.repos.sales(), id).await?;
    require_reference(state.repos.customers(), "customerId", req.customer_id).await?;
    let updated = state.repos.sales().update(id, SaleDraft::from(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sales/{id}",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 204, description = "Deleted together with its debts"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.sales().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
