use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{create_api_router, ApiState, AppState};
use crate::infrastructure::database::test_support::memory_db;
use crate::infrastructure::SeaOrmRepositoryProvider;
use crate::shared::{PageLimits, PaginationMetaData, PAGINATION_HEADER};

async fn app() -> Router {
    let db = memory_db().await;
    let state = ApiState {
        app: AppState {
            repos: Arc::new(SeaOrmRepositoryProvider::new(db.clone())),
            pagination: PageLimits::default(),
        },
        db,
        started_at: Arc::new(Instant::now()),
        prometheus: PrometheusBuilder::new().build_recorder().handle(),
    };
    create_api_router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, value)
}

fn page_meta(headers: &HeaderMap) -> PaginationMetaData {
    let raw = headers.get(PAGINATION_HEADER).unwrap().to_str().unwrap();
    PaginationMetaData::from_header(raw).unwrap()
}

async fn create_category(app: &Router, name: &str) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "categoryName": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

async fn create_product(app: &Router, name: &str, code: &str, category_id: i64) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/products",
        Some(json!({
            "productName": name,
            "productCode": code,
            "salePrice": 1500,
            "supplyPrice": 1000,
            "categoryId": category_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

async fn create_customer(app: &Router, name: &str) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "fullName": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

async fn create_sale(app: &Router, receipt: &str, customer_id: i64) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/sales",
        Some(json!({
            "receipt": receipt,
            "saleDate": "2024-05-01T10:00:00Z",
            "totalDue": 10000,
            "totalPaid": 2500,
            "customerId": customer_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn list_returns_plain_array_with_pagination_header() {
    let app = app().await;
    let cat = create_category(&app, "Hardware").await;
    for i in 1..=12 {
        create_product(&app, &format!("Item {:02}", i), &format!("C{:02}", i), cat).await;
    }

    let (status, headers, body) =
        send(&app, Method::GET, "/api/v1/products?pageNumber=2&pageSize=5", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["productName"], "Item 06");
    assert_eq!(items[0]["margin"], 500);

    let meta = page_meta(&headers);
    assert_eq!(meta.total_count, 12);
    assert_eq!(meta.page_size, 5);
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.total_pages, 3);
    assert!(meta.has_previous);
    assert!(meta.has_next);
}

#[tokio::test]
async fn paging_parameters_are_clamped_not_rejected() {
    let app = app().await;
    create_category(&app, "Only").await;

    let (status, headers, _) = send(
        &app,
        Method::GET,
        "/api/v1/categories?pageNumber=0&pageSize=100",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let meta = page_meta(&headers);
    assert_eq!((meta.current_page, meta.page_size), (1, 50));

    let (status, headers, _) = send(
        &app,
        Method::GET,
        "/api/v1/categories?pageNumber=abc&pageSize=-3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let meta = page_meta(&headers);
    assert_eq!((meta.current_page, meta.page_size), (1, 1));

    let (_, headers, _) = send(&app, Method::GET, "/api/v1/categories", None).await;
    assert_eq!(page_meta(&headers).page_size, 15);
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_metadata() {
    let app = app().await;
    create_customer(&app, "Ann").await;

    let (status, headers, body) =
        send(&app, Method::GET, "/api/v1/customers?pageNumber=9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    let meta = page_meta(&headers);
    assert_eq!(meta.total_count, 1);
    assert!(meta.has_previous);
    assert!(!meta.has_next);
}

#[tokio::test]
async fn head_is_served_by_list_route() {
    let app = app().await;
    let (status, headers, _) = send(&app, Method::HEAD, "/api/v1/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers.contains_key(PAGINATION_HEADER));
}

#[tokio::test]
async fn category_crud_status_codes() {
    let app = app().await;
    let id = create_category(&app, "Garden").await;
    let uri = format!("/api/v1/categories/{}", id);

    let (status, _, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categoryName"], "Garden");

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "categoryName": "Garden & Patio", "description": "outdoor" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "outdoor");

    let (status, _, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Category"));

    let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_and_invalid_bodies() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/categories")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "categoryName": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("category name must be 1-150 characters"));
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let app = app().await;
    create_category(&app, "Tools").await;
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "categoryName": "Tools" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn patch_applies_operations_then_validates() {
    let app = app().await;
    let id = create_category(&app, "Paint").await;
    let uri = format!("/api/v1/categories/{}", id);
    send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "categoryName": "Paint", "description": "walls" })),
    )
    .await;

    let (status, _, body) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!([
            { "field": "categoryName", "value": "Paints" },
            { "field": "description", "value": null }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["categoryName"], "Paints");
    assert_eq!(body["description"], Value::Null);

    let (status, _, _) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!([{ "field": "categoryName", "value": "" }])),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, _) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!([{ "field": "colour", "value": "red" }])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!([{ "field": "parentId", "value": id }])),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, _, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["categoryName"], "Paints");
}

#[tokio::test]
async fn patch_on_missing_resource_is_not_found() {
    let app = app().await;
    let (status, _, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/customers/5",
        Some(json!([{ "field": "isActive", "value": false }])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn options_lists_allowed_methods() {
    let app = app().await;
    let (status, headers, _) = send(&app, Method::OPTIONS, "/api/v1/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::ALLOW).unwrap(), "GET,HEAD,POST,OPTIONS");
}

#[tokio::test]
async fn unknown_reference_is_unprocessable() {
    let app = app().await;
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/products",
        Some(json!({
            "productName": "Orphan",
            "productCode": "O-1",
            "salePrice": 1,
            "supplyPrice": 1,
            "categoryId": 99,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("categoryId"));
}

#[tokio::test]
async fn deleting_category_in_use_conflicts() {
    let app = app().await;
    let cat = create_category(&app, "Locked").await;
    create_product(&app, "Pin", "PIN", cat).await;
    let uri = format!("/api/v1/categories/{}", cat);
    let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn sub_lists_force_the_parent_filter() {
    let app = app().await;
    let ann = create_customer(&app, "Ann").await;
    let bob = create_customer(&app, "Bob").await;
    create_sale(&app, "R-1", ann).await;
    create_sale(&app, "R-2", ann).await;
    create_sale(&app, "R-3", bob).await;

    let uri = format!("/api/v1/customers/{}/sales?customerId={}", ann, bob);
    let (status, headers, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page_meta(&headers).total_count, 2);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["customerId"].as_i64() == Some(ann)));

    let (status, _, _) = send(&app, Method::GET, "/api/v1/customers/404/sales", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::GET, "/api/v1/categories/404/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::GET, "/api/v1/suppliers/404/supplies", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn closing_a_debt_stamps_the_close_date() {
    let app = app().await;
    let customer = create_customer(&app, "Cy").await;
    let sale = create_sale(&app, "R-9", customer).await;

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/debts",
        Some(json!({
            "saleId": sale,
            "totalDue": 7500,
            "debtDate": "2024-05-01T10:00:00Z",
            "status": "Closed",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert!(body["closedDate"].is_string());
    assert_eq!(body["remaining"], 7500);

    let (_, headers, body) =
        send(&app, Method::GET, &format!("/api/v1/sales/{}/debts", sale), None).await;
    assert_eq!(page_meta(&headers).total_count, 1);
    assert_eq!(body[0]["status"], "Closed");
}

#[tokio::test]
async fn supplies_filter_by_date_window() {
    let app = app().await;
    let (status, _, supplier) = send(
        &app,
        Method::POST,
        "/api/v1/suppliers",
        Some(json!({ "fullName": "Acme", "company": "Acme Ltd" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let supplier_id = supplier["id"].as_i64().unwrap();

    for day in ["2024-01-10", "2024-02-10", "2024-03-10"] {
        let (status, _, body) = send(
            &app,
            Method::POST,
            "/api/v1/supplies",
            Some(json!({
                "supplierId": supplier_id,
                "supplyDate": format!("{}T08:00:00Z", day),
                "totalDue": 4000,
                "totalPaid": 1000,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    let (status, headers, body) = send(
        &app,
        Method::GET,
        "/api/v1/supplies?from=2024-02-01T00:00:00Z&to=2024-04-01T00:00:00Z",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page_meta(&headers).total_count, 2);
    assert_eq!(body[0]["supplyDate"], "2024-03-10T08:00:00Z");
    assert_eq!(body[0]["outstanding"], 3000);
}

#[tokio::test]
async fn ambient_routes_respond() {
    let app = app().await;

    let (status, _, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _, _) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = send(&app, Method::GET, "/api-doc/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/categories/{id}/children"].is_object());
}

#[tokio::test]
async fn huge_page_number_is_an_empty_page() {
    let app = app().await;
    create_category(&app, "Solo").await;

    for size in [50, 2] {
        let uri = format!(
            "/api/v1/categories?pageNumber=9223372036854775807&pageSize={}",
            size
        );
        let (status, headers, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK, "pageSize={} {}", size, body);
        assert_eq!(body, json!([]));
        let meta = page_meta(&headers);
        assert_eq!(meta.current_page, i64::MAX as u64);
        assert_eq!(meta.page_size, size);
        assert_eq!(meta.total_count, 1);
        assert!(meta.has_previous);
        assert!(!meta.has_next);
    }
}

#[tokio::test]
async fn bad_path_and_filter_values_use_the_error_envelope() {
    let app = app().await;

    let (status, _, body) = send(&app, Method::GET, "/api/v1/categories/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    let (status, _, body) =
        send(&app, Method::GET, "/api/v1/products?orderBy=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
}

#[tokio::test]
async fn reparenting_into_a_descendant_is_rejected() {
    let app = app().await;
    let a = create_category(&app, "A").await;
    let b = create_category(&app, "B").await;
    let c = create_category(&app, "C").await;

    let (status, _, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/categories/{}", b),
        Some(json!({ "categoryName": "B", "parentId": a })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/categories/{}", c),
        Some(json!([{ "field": "parentId", "value": b }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // A -> B -> C; making A a child of C would close the loop.
    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/categories/{}", a),
        Some(json!({ "categoryName": "A", "parentId": c })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("parentId"));

    let (status, _, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/categories/{}", a),
        Some(json!([{ "field": "parentId", "value": b }])),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, _, body) = send(&app, Method::GET, &format!("/api/v1/categories/{}", a), None).await;
    assert_eq!(body["parentId"], Value::Null);
}

#[tokio::test]
async fn sale_carries_pricing_fields() {
    let app = app().await;
    let customer = create_customer(&app, "Dee").await;

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/sales",
        Some(json!({
            "receipt": "W-1",
            "saleDate": "2024-06-01T09:00:00Z",
            "totalDue": 20000,
            "discountPercentage": 5.0,
            "discount": 1000,
            "saleType": "Wholesale",
            "customerId": customer,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["saleType"], "Wholesale");
    assert_eq!(body["discount"], 1000);

    create_sale(&app, "R-1", customer).await;
    let (_, headers, body) =
        send(&app, Method::GET, "/api/v1/sales?saleType=Wholesale", None).await;
    assert_eq!(page_meta(&headers).total_count, 1);
    assert_eq!(body[0]["receipt"], "W-1");
}

#[tokio::test]
async fn sale_details_are_scoped_to_their_sale() {
    let app = app().await;
    let cat = create_category(&app, "Drinks").await;
    let cola = create_product(&app, "Cola", "COLA", cat).await;
    let customer = create_customer(&app, "Eve").await;
    let first = create_sale(&app, "R-10", customer).await;
    let second = create_sale(&app, "R-11", customer).await;

    let lines = format!("/api/v1/sales/{}/details", first);
    for quantity in [1, 2, 3] {
        let (status, _, body) = send(
            &app,
            Method::POST,
            &lines,
            Some(json!({ "productId": cola, "quantity": quantity, "unitPrice": 1500, "discount": 500 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        assert_eq!(body["saleId"], first);
    }

    let (status, headers, body) = send(
        &app,
        Method::GET,
        &format!("{}?pageSize=2&orderBy=quantity&descending=true", lines),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let meta = page_meta(&headers);
    assert_eq!((meta.total_count, meta.total_pages), (3, 2));
    assert_eq!(body[0]["quantity"], 3);
    assert_eq!(body[0]["lineTotal"], 4000);
    let line_id = body[0]["id"].as_i64().unwrap();

    // A line is only reachable through the sale that owns it.
    let foreign = format!("/api/v1/sales/{}/details/{}", second, line_id);
    let (status, _, _) = send(&app, Method::GET, &foreign, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = send(&app, Method::DELETE, &foreign, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let own = format!("{}/{}", lines, line_id);
    let (status, _, body) = send(
        &app,
        Method::PUT,
        &own,
        Some(json!({ "productId": cola, "quantity": 4, "unitPrice": 1500 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["lineTotal"], 6000);

    let (status, _, body) = send(
        &app,
        Method::POST,
        &lines,
        Some(json!({ "productId": 999, "quantity": 1, "unitPrice": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("productId"));

    let (status, _, _) = send(&app, Method::DELETE, &own, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&app, Method::GET, "/api/v1/sales/404/details", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Products still on a sale line cannot be deleted.
    let (status, _, _) =
        send(&app, Method::DELETE, &format!("/api/v1/products/{}", cola), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn supply_details_page_and_price_lines() {
    let app = app().await;
    let cat = create_category(&app, "Grain").await;
    let rice = create_product(&app, "Rice", "RICE", cat).await;
    let (_, _, supplier) = send(
        &app,
        Method::POST,
        "/api/v1/suppliers",
        Some(json!({ "fullName": "Mill" })),
    )
    .await;
    let (status, _, supply) = send(
        &app,
        Method::POST,
        "/api/v1/supplies",
        Some(json!({
            "supplierId": supplier["id"],
            "supplyDate": "2024-02-01T08:00:00Z",
            "totalDue": 9000,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", supply);
    let supply_id = supply["id"].as_i64().unwrap();

    let lines = format!("/api/v1/supplies/{}/details", supply_id);
    let (status, _, body) = send(
        &app,
        Method::POST,
        &lines,
        Some(json!({ "productId": rice, "quantity": 10, "unitPrice": 1000, "unitPriceDiscount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["lineTotal"], 9000);

    let (status, headers, body) = send(&app, Method::GET, &lines, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page_meta(&headers).total_count, 1);
    assert_eq!(body[0]["supplyId"], supply_id);

    let (status, _, _) = send(&app, Method::GET, "/api/v1/supplies/404/details", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) =
        send(&app, Method::DELETE, &format!("/api/v1/supplies/{}", supply_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&app, Method::GET, &lines, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
