//! Sale debt REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{DebtFilter, DebtRequest, DebtResponse};
use crate::domain::{DebtQuery, SaleDebtDraft};
use crate::interfaces::http::common::{
    require_found, require_reference, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

fn draft(req: DebtRequest) -> SaleDebtDraft {
    SaleDebtDraft::from(req).normalized(Utc::now())
}

#[utoipa::path(
    get,
    path = "/api/v1/debts",
    tag = "Debts",
    params(PaginationParams, DebtFilter),
    responses(
        (status = 200, description = "One page of debts, newest first", body = Vec<DebtResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_debts(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<DebtFilter>,
) -> Result<Paginated<DebtResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .debts()
        .find_page(&DebtQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(DebtResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/debts/{id}",
    tag = "Debts",
    params(("id" = i32, Path, description = "Debt ID")),
    responses(
        (status = 200, description = "Debt details", body = DebtResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_debt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DebtResponse>, ApiError> {
    let debt = state.repos.debts().get(id).await?;
    Ok(Json(debt.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/debts",
    tag = "Debts",
    request_body = DebtRequest,
    responses(
        (status = 201, description = "Created", body = DebtResponse),
        (status = 422, description = "Validation failed or unknown sale", body = ApiResponse<String>)
    )
)]
pub async fn create_debt(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DebtRequest>,
) -> Result<(StatusCode, Json<DebtResponse>), ApiError> {
    require_reference(state.repos.sales(), "saleId", req.sale_id).await?;
    let created = state.repos.debts().create(draft(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/debts/{id}",
    tag = "Debts",
    params(("id" = i32, Path, description = "Debt ID")),
    request_body = DebtRequest,
    responses(
        (status = 200, description = "Updated", body = DebtResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown sale", body = ApiResponse<String>)
    )
)]
pub async fn update_debt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<DebtRequest>,
) -> Result<Json<DebtResponse>, ApiError> {
    require_found(state.repos.debts(), id).await?;
    require_reference(state.repos.sales(), "saleId", req.sale_id).await?;
    let updated = state.repos.debts().update(id, draft(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/debts/{id}",
    tag = "Debts",
    params(("id" = i32, Path, description = "Debt ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_debt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.debts().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
