//! API Router with Swagger UI

use axum::{
    http::HeaderName,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics};
use super::modules::request_id::{request_id_middleware, REQUEST_ID_HEADER};
use super::modules::{
    categories, customers, debts, health, products, sale_details, sales, suppliers, supplies,
    supply_details,
};
use super::state::ApiState;
use crate::domain::{DebtStatus, SaleStatus, SaleType};
use crate::shared::{PaginationMetaData, PAGINATION_HEADER};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Categories
        categories::list_categories,
        categories::category_options,
        categories::get_category,
        categories::list_category_products,
        categories::list_category_children,
        categories::create_category,
        categories::update_category,
        categories::patch_category,
        categories::delete_category,
        // Products
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::patch_product,
        products::delete_product,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::list_customer_sales,
        customers::create_customer,
        customers::update_customer,
        customers::patch_customer,
        customers::delete_customer,
        // Suppliers
        suppliers::list_suppliers,
        suppliers::get_supplier,
        suppliers::list_supplier_supplies,
        suppliers::create_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        // Supplies
        supplies::list_supplies,
        supplies::get_supply,
        supplies::create_supply,
        supplies::update_supply,
        supplies::delete_supply,
        supply_details::list_supply_details,
        supply_details::get_supply_detail,
        supply_details::create_supply_detail,
        supply_details::update_supply_detail,
        supply_details::delete_supply_detail,
        // Sales
        sales::list_sales,
        sales::get_sale,
        sales::list_sale_debts,
        sales::create_sale,
        sales::update_sale,
        sales::delete_sale,
        sale_details::list_sale_details,
        sale_details::get_sale_detail,
        sale_details::create_sale_detail,
        sale_details::update_sale_detail,
        sale_details::delete_sale_detail,
        // Debts
        debts::list_debts,
        debts::get_debt,
        debts::create_debt,
        debts::update_debt,
        debts::delete_debt,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationMetaData,
            health::HealthResponse,
            health::ComponentHealth,
            // Categories
            categories::CategoryResponse,
            categories::CategoryRequest,
            categories::CategoryPatch,
            // Products
            products::ProductResponse,
            products::ProductRequest,
            products::ProductPatch,
            // Customers
            customers::CustomerResponse,
            customers::CustomerRequest,
            customers::CustomerPatch,
            // Suppliers
            suppliers::SupplierResponse,
            suppliers::SupplierRequest,
            // Supplies
            supplies::SupplyResponse,
            supplies::SupplyRequest,
            supply_details::SupplyDetailResponse,
            supply_details::SupplyDetailRequest,
            // Sales
            sales::SaleResponse,
            sales::SaleRequest,
            SaleStatus,
            SaleType,
            sale_details::SaleDetailResponse,
            sale_details::SaleDetailRequest,
            // Debts
            debts::DebtResponse,
            debts::DebtRequest,
            DebtStatus,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Categories", description = "Product categories, optionally nested"),
        (name = "Products", description = "Catalogue of sellable products"),
        (name = "Customers", description = "Customers and their sales history"),
        (name = "Suppliers", description = "Suppliers and their deliveries"),
        (name = "Supplies", description = "Incoming deliveries from suppliers and their product lines"),
        (name = "Sales", description = "Sales to customers and their product lines"),
        (name = "Debts", description = "Unpaid remainders recorded against sales"),
    ),
    info(
        title = "Reverse Analytics API",
        version = "1.0.0",
        description = "Inventory and sales REST API. List endpoints return a plain JSON array \
                       and describe the page in the `X-Pagination` response header."
    )
)]
pub struct ApiDoc;

fn category_routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories)
                .post(categories::create_category)
                .options(categories::category_options),
        )
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .patch(categories::patch_category)
                .delete(categories::delete_category),
        )
        .route("/{id}/products", get(categories::list_category_products))
        .route("/{id}/children", get(categories::list_category_children))
}

fn product_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(products::list_products).post(products::create_product))
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .patch(products::patch_product)
                .delete(products::delete_product),
        )
}

fn customer_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(customers::list_customers).post(customers::create_customer))
        .route(
            "/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .patch(customers::patch_customer)
                .delete(customers::delete_customer),
        )
        .route("/{id}/sales", get(customers::list_customer_sales))
}

fn supplier_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(suppliers::list_suppliers).post(suppliers::create_supplier))
        .route(
            "/{id}",
            get(suppliers::get_supplier)
                .put(suppliers::update_supplier)
                .delete(suppliers::delete_supplier),
        )
        .route("/{id}/supplies", get(suppliers::list_supplier_supplies))
}

fn supply_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(supplies::list_supplies).post(supplies::create_supply))
        .route(
            "/{id}",
            get(supplies::get_supply)
                .put(supplies::update_supply)
                .delete(supplies::delete_supply),
        )
        .route(
            "/{id}/details",
            get(supply_details::list_supply_details).post(supply_details::create_supply_detail),
        )
        .route(
            "/{id}/details/{detail_id}",
            get(supply_details::get_supply_detail)
                .put(supply_details::update_supply_detail)
                .delete(supply_details::delete_supply_detail),
        )
}

fn sale_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(sales::list_sales).post(sales::create_sale))
        .route(
            "/{id}",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        .route("/{id}/debts", get(sales::list_sale_debts))
        .route(
            "/{id}/details",
            get(sale_details::list_sale_details).post(sale_details::create_sale_detail),
        )
        .route(
            "/{id}/details/{detail_id}",
            get(sale_details::get_sale_detail)
                .put(sale_details::update_sale_detail)
                .delete(sale_details::delete_sale_detail),
        )
}

fn debt_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(debts::list_debts).post(debts::create_debt))
        .route(
            "/{id}",
            get(debts::get_debt)
                .put(debts::update_debt)
                .delete(debts::delete_debt),
        )
}

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    // Browsers only let scripts read non-safelisted headers that are exposed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            HeaderName::from_static(PAGINATION_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ]);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Health & metrics
        .route("/health", get(health::health_check))
        .route("/metrics", get(prometheus_metrics))
        // Resources
        .nest("/api/v1/categories", category_routes())
        .nest("/api/v1/products", product_routes())
        .nest("/api/v1/customers", customer_routes())
        .nest("/api/v1/suppliers", supplier_routes())
        .nest("/api/v1/supplies", supply_routes())
        .nest("/api/v1/sales", sale_routes())
        .nest("/api/v1/debts", debt_routes())
        .layer(middleware::from_fn(http_metrics_middleware))
        .with_state(state)
        // Swagger UI
        .merge(swagger_routes)
        // Middleware
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
