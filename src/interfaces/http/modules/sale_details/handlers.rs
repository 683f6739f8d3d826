//! Sale detail REST API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LineFilter, SaleDetailRequest, SaleDetailResponse};
use crate::domain::{Resource, SaleDetail};
use crate::interfaces::http::common::{
    require_found, require_reference, ApiError, ApiResponse, Paginated, Path, Query, ValidatedJson,
};
use crate::interfaces::http::state::AppState;
use crate::shared::{DomainError, PaginationParams};

/// The line must exist and belong to the sale in the path.
async fn owned_detail(state: &AppState, sale_id: i32, detail_id: i32) -> Result<SaleDetail, ApiError> {
    require_found(state.repos.sales(), sale_id).await?;
    state
        .repos
        .sale_details()
        .find_by_id(detail_id)
        .await?
        .filter(|d| d.sale_id == sale_id)
        .ok_or_else(|| DomainError::not_found(SaleDetail::NAME, detail_id).into())
}

#[utoipa::path(
    get,
    path = "/api/v1/sales/{id}/details",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID"), PaginationParams, LineFilter),
    responses(
        (status = 200, description = "One page of the sale's product lines", body = Vec<SaleDetailResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Sale not found", body = ApiResponse<String>)
    )
)]
pub async fn list_sale_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<LineFilter>,
) -> Result<Paginated<SaleDetailResponse>, ApiError> {
    require_found(state.repos.sales(), id).await?;
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .sale_details()
        .find_page(&filter.for_sale(id), page)
        .await?;
    Ok(Paginated(list.map(SaleDetailResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/sales/{id}/details/{detail_id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID"),
        ("detail_id" = i32, Path, description = "Sale detail ID")
    ),
    responses(
        (status = 200, description = "Product line", body = SaleDetailResponse),
        (status = 404, description = "Sale or line not found", body = ApiResponse<String>)
    )
)]
pub async fn get_sale_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
) -> Result<Json<SaleDetailResponse>, ApiError> {
    let detail = owned_detail(&state, id, detail_id).await?;
    Ok(Json(detail.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/sales/{id}/details",
    tag = "Sales",
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = SaleDetailRequest,
    responses(
        (status = 201, description = "Created", body = SaleDetailResponse),
        (status = 404, description = "Sale not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown product", body = ApiResponse<String>)
    )
)]
pub async fn create_sale_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SaleDetailRequest>,
) -> Result<(StatusCode, Json<SaleDetailResponse>), ApiError> {
    require_found(state.repos.sales(), id).await?;
    require_reference(state.repos.products(), "productId", req.product_id).await?;
    let created = state.repos.sale_details().create(req.into_draft(id)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/sales/{id}/details/{detail_id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID"),
        ("detail_id" = i32, Path, description = "Sale detail ID")
    ),
    request_body = SaleDetailRequest,
    responses(
        (status = 200, description = "Updated", body = SaleDetailResponse),
        (status = 404, description = "Sale or line not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown product", body = ApiResponse<String>)
    )
)]
pub async fn update_sale_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
    ValidatedJson(req): ValidatedJson<SaleDetailRequest>,
) -> Result<Json<SaleDetailResponse>, ApiError> {
    owned_detail(&state, id, detail_id).await?;
    require_reference(state.repos.products(), "productId", req.product_id).await?;
    let updated = state
        .repos
        .sale_details()
        .update(detail_id, req.into_draft(id))
        .await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sales/{id}/details/{detail_id}",
    tag = "Sales",
    params(
        ("id" = i32, Path, description = "Sale ID"),
        ("detail_id" = i32, Path, description = "Sale detail ID")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Sale or line not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_sale_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    owned_detail(&state, id, detail_id).await?;
    state.repos.sale_details().delete(detail_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
