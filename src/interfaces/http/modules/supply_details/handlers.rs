//! Supply detail REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{supply_lines, SupplyDetailRequest, SupplyDetailResponse};
use crate::domain::{Resource, SupplyDetail};
use crate::interfaces::http::common::{
    require_found, require_reference, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::modules::sale_details::LineFilter;
use crate::interfaces::http::state::AppState;
use crate::shared::{DomainError, PaginationParams};

async fn owned_detail(state: &AppState, supply_id: i32, detail_id: i32) -> Result<SupplyDetail, ApiError> {
    require_found(state.repos.supplies(), supply_id).await?;
    state
        .repos
        .supply_details()
        .find_by_id(detail_id)
        .await?
        .filter(|d| d.supply_id == supply_id)
        .ok_or_else(|| DomainError::not_found(SupplyDetail::NAME, detail_id).into())
}

#[utoipa::path(
    get,
    path = "/api/v1/supplies/{id}/details",
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply ID"), PaginationParams, LineFilter),
    responses(
        (status = 200, description = "One page of the delivery's product lines", body = Vec<SupplyDetailResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Supply not found", body = ApiResponse<String>)
    )
)]
pub async fn list_supply_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<LineFilter>,
) -> Result<Paginated<SupplyDetailResponse>, ApiError> {
    require_found(state.repos.supplies(), id).await?;
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .supply_details()
        .find_page(&supply_lines(filter, id), page)
        .await?;
    Ok(Paginated(list.map(SupplyDetailResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/supplies/{id}/details/{detail_id}",
    tag = "Supplies",
    params(
        ("id" = i32, Path, description = "Supply ID"),
        ("detail_id" = i32, Path, description = "Supply detail ID")
    ),
    responses(
        (status = 200, description = "Product line", body = SupplyDetailResponse),
        (status = 404, description = "Supply or line not found", body = ApiResponse<String>)
    )
)]
pub async fn get_supply_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
) -> Result<Json<SupplyDetailResponse>, ApiError> {
    let detail = owned_detail(&state, id, detail_id).await?;
    Ok(Json(detail.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/supplies/{id}/details",
    tag = "Supplies",
    params(("id" = i32, Path, description = "Supply ID")),
    request_body = SupplyDetailRequest,
    responses(
        (status = 201, description = "Created", body = SupplyDetailResponse),
        (status = 404, description = "Supply not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown product", body = ApiResponse<String>)
    )
)]
pub async fn create_supply_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SupplyDetailRequest>,
) -> Result<(StatusCode, Json<SupplyDetailResponse>), ApiError> {
    require_found(state.repos.supplies(), id).await?;
    require_reference(state.repos.products(), "productId", req.product_id).await?;
    let created = state.repos.supply_details().create(req.into_draft(id)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/supplies/{id}/details/{detail_id}",
    tag = "Supplies",
    params(
        ("id" = i32, Path, description = "Supply ID"),
        ("detail_id" = i32, Path, description = "Supply detail ID")
    ),
    request_body = SupplyDetailRequest,
    responses(
        (status = 200, description = "Updated", body = SupplyDetailResponse),
        (status = 404, description = "Supply or line not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown product", body = ApiResponse<String>)
    )
)]
pub async fn update_supply_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
    ValidatedJson(req): ValidatedJson<SupplyDetailRequest>,
) -> Result<Json<SupplyDetailResponse>, ApiError> {
    owned_detail(&state, id, detail_id).await?;
    require_reference(state.repos.products(), "productId", req.product_id).await?;
    let updated = state
        .repos
        .supply_details()
        .update(detail_id, req.into_draft(id))
        .await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/supplies/{id}/details/{detail_id}",
    tag = "Supplies",
    params(
        ("id" = i32, Path, description = "Supply ID"),
        ("detail_id" = i32, Path, description = "Supply detail ID")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Supply or line not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_supply_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    owned_detail(&state, id, detail_id).await?;
    state.repos.supply_details().delete(detail_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
