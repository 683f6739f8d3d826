//! Product REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{ProductFilter, ProductPatch, ProductRequest, ProductResponse};
use crate::domain::{ProductDraft, ProductQuery};
use crate::interfaces::http::common::{
    apply_patch, require_found, require_reference, ApiError, ApiResponse, JsonBody, Paginated, Path,
    Query, ValidatedJson,
};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(PaginationParams, ProductFilter),
    responses(
        (status = 200, description = "One page of products", body = Vec<ProductResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<ProductFilter>,
) -> Result<Paginated<ProductResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .products()
        .find_page(&ProductQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(ProductResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.repos.products().get(id).await?;
    Ok(Json(product.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created", body = ProductResponse),
        (status = 409, description = "Product code already taken", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown category", body = ApiResponse<String>)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    require_reference(state.repos.categories(), "categoryId", req.category_id).await?;
    let created = state.repos.products().create(ProductDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated", body = ProductResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed or unknown category", body = ApiResponse<String>)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    require_found(state.repos.products(), id).await?;
    require_reference(state.repos.categories(), "categoryId", req.category_id).await?;
    let updated = state.repos.products().update(id, ProductDraft::from(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = Vec<ProductPatch>,
    responses(
        (status = 200, description = "Patched", body = ProductResponse),
        (status = 400, description = "Malformed patch document", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Patched product is invalid", body = ApiResponse<String>)
    )
)]
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(ops): JsonBody<Vec<ProductPatch>>,
) -> Result<Json<ProductResponse>, ApiError> {
    let current = state.repos.products().get(id).await?;
    let patched = apply_patch(ProductRequest::from(current), ops)?;
    require_reference(state.repos.categories(), "categoryId", patched.category_id).await?;
    let updated = state.repos.products().update(id, ProductDraft::from(patched)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.products().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
