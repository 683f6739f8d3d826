//! Customer REST API handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CustomerFilter, CustomerPatch, CustomerRequest, CustomerResponse};
use crate::domain::{CustomerDraft, CustomerQuery, SaleQuery};
use crate::interfaces::http::common::{
    apply_patch, require_found, ApiError, ApiResponse, JsonBody, Paginated, Path, Query,
    ValidatedJson,
};
use crate::interfaces::http::modules::sales::{SaleFilter, SaleResponse};
use crate::interfaces::http::state::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    params(PaginationParams, CustomerFilter),
    responses(
        (status = 200, description = "One page of customers", body = Vec<CustomerResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)")))
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<CustomerFilter>,
) -> Result<Paginated<CustomerResponse>, ApiError> {
    let page = paging.resolve(&state.pagination);
    let list = state
        .repos
        .customers()
        .find_page(&CustomerQuery::from(filter), page)
        .await?;
    Ok(Paginated(list.map(CustomerResponse::from)))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.repos.customers().get(id).await?;
    Ok(Json(customer.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}/sales",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID"), PaginationParams, SaleFilter),
    responses(
        (status = 200, description = "One page of the customer's sales", body = Vec<SaleResponse>,
            headers(("x-pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 404, description = "Customer not found", body = ApiResponse<String>)
    )
)]
pub async fn list_customer_sales(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(paging): Query<PaginationParams>,
    Query(filter): Query<SaleFilter>,
) -> Result<Paginated<SaleResponse>, ApiError> {
    require_found(state.repos.customers(), id).await?;
    let query = SaleQuery {
        customer_id: Some(id),
        ..SaleQuery::from(filter)
    };
    let page = paging.resolve(&state.pagination);
    let list = state.repos.sales().find_page(&query, page).await?;
    Ok(Paginated(list.map(SaleResponse::from)))
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Created", body = CustomerResponse),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let created = state.repos.customers().create(CustomerDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Updated", body = CustomerResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Validation failed", body = ApiResponse<String>)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let updated = state.repos.customers().update(id, CustomerDraft::from(req)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = Vec<CustomerPatch>,
    responses(
        (status = 200, description = "Patched", body = CustomerResponse),
        (status = 400, description = "Malformed patch document", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Patched customer is invalid", body = ApiResponse<String>)
    )
)]
pub async fn patch_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(ops): JsonBody<Vec<CustomerPatch>>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let current = state.repos.customers().get(id).await?;
    let patched = apply_patch(CustomerRequest::from(current), ops)?;
    let updated = state.repos.customers().update(id, CustomerDraft::from(patched)).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 409, description = "Customer still has sales", body = ApiResponse<String>)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.customers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
