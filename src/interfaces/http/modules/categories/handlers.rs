//! Category REST API handlers

use std::collections::HashSet;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::dto::{CategoryFilter, CategoryPatch, CategoryRequest, CategoryResponse};
use crate::domain::{CategoryDraft, CategoryQuery, ProductQuery};
use crate::interfaces::http::common::{
    apply_patch, require_found, require_reference, ApiError, ApiResponse, JsonBody, Paginated, Path,
    Query, ValidatedJson,
};
use crate::interfaces::http::modules::products::{ProductFilter, ProductResponse};
use crate::interfaces::http::state::AppState;
use crate::shared::{DomainError, PaginationParams};

/// Parent must exist and must not be the category itself or one of its
/// descendants.
async fn check_parent(state: &AppState, id: Option<i32>, draft: &CategoryDraft) -> Result<(), ApiError> {
    let Some(parent_id) = draft.parent_id else {
        return Ok(());
    };
    if Some(parent_id) == id {
        return Err(DomainError::Validation("parentId: a category cannot be its own parent".into()).into());
    }
    let repo = state.repos.categories();
    require_reference(repo, "parentId", parent_id).await?;

    // A new category has no descendants yet.
    let Some(id) = id else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    let mut next = Some(parent_id);
    while let Some(ancestor) = next {
        if ancestor == id {
            return Err(DomainError::Validation(format!(
                "parentId: category {} is a descendant of category {}",
                parent_id, id
            ))
            .into());
        }
        if !seen.insert(ancestor) {
            break;
        }
        next = repo.find_by_id(ancestor).await?.and_then(|c| c.parent_id);
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    params(PaginationParams, CategoryFilter),
    responses(
        (status = 200, description = "One page of categories", body = Vec<CategoryResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<CategoryFilter>,
) -> Result<Paginated<CategoryResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .categories()
        .find_page(&CategoryQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(CategoryResponse::from)))
}

#[utoipa::path(
    options,
    path = "/api/v1/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Supported methods",
            headers(("allow" = String, description = "GET,HEAD,POST,OPTIONS")))
    )
)]
pub async fn category_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET,HEAD,POST,OPTIONS")])
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.repos.categories().get(id).await?;
    Ok(Json(category.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/products",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID"), PaginationParams, ProductFilter),
    responses(
        (status = 200, description = "One page of the category's products", body = Vec<ProductResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Category not found", body = ApiResponse<String>)
    )
)]
pub async fn list_category_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<ProductFilter>,
) -> Result<Paginated<ProductResponse>, ApiError> {
    require_found(state.repos.categories(), id).await?;
    let query = ProductQuery {
        category_id: Some(id),
        ..ProductQuery::from(filter)
    };
    let page = paging.resolve(&state.pagination);
    let list = state.repos.products().find_page(&query, page).await?;
    Ok(Paginated(list.map(ProductResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/children",
    tag = "Categories",
    params(("id" = i32, Path, description = "Parent category ID"), PaginationParams),
    responses(
        (status = 200, description = "One page of direct subcategories", body = Vec<CategoryResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Category not found", body = ApiResponse<String>)
    )
)]
pub async fn list_category_children(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
) -> Result<Paginated<CategoryResponse>, ApiError> {
    require_found(state.repos.categories(), id).await?;
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .categories()
        .find_page(&CategoryQuery::children_of(id), page)
        .await?;
    Ok(Paginated(list.map(CategoryResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Created", body = CategoryResponse),
        (status = 409, description = "Name already taken", body = ApiResponse<String>),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let draft = CategoryDraft::from(req);
    check_parent(&state, None, &draft).await?;
    let created = state.repos.categories().create(draft).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Updated", body = CategoryResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    require_found(state.repos.categories(), id).await?;
    let draft = CategoryDraft::from(req);
    check_parent(&state, Some(id), &draft).await?;
    let updated = state.repos.categories().update(id, draft).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = Vec<CategoryPatch>,
    responses(
        (status = 200, description = "Patched", body = CategoryResponse),
        (status = 400, description = "Malformed patch document", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Patched category is invalid", body = ApiResponse<String>)
    )
)]
pub async fn patch_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(ops): JsonBody<Vec<CategoryPatch>>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let current = state.repos.categories().get(id).await?;
    let patched = apply_patch(CategoryRequest::from(current), ops)?;
    let draft = CategoryDraft::from(patched);
    check_parent(&state, Some(id), &draft).await?;
    let updated = state.repos.categories().update(id, draft).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 409, description = "Category still has products", body = ApiResponse<String>)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.categories().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
