//! HTTP surface tests, driving the assembled router with oneshot requests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gourmet_server::{Latency, MemoryStore, ServerState, TransitionPolicy};
use shared::models::{AppSettings, Dish, Order, OrderStatus, User};

fn app() -> Router {
    let state = ServerState::new(
        Arc::new(MemoryStore::seeded()),
        Latency::ZERO,
        TransitionPolicy::Unrestricted,
    );
    gourmet_server::api::router(state)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn dishes_endpoint_applies_both_filters() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/api/dishes?categoryId=cat4&searchTerm=suco"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dishes: Vec<Dish> = body_json(response).await;
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].name, "Suco Natural (300ml)");
    assert_eq!(dishes[0].category_name.as_deref(), Some("Bebidas"));

    let response = app.oneshot(get("/api/dishes")).await.unwrap();
    let all: Vec<Dish> = body_json(response).await;
    assert_eq!(all.len(), 10);
}

#[tokio::test]
async fn orders_endpoint_filters_by_status_newest_first() {
    let app = app();
    let response = app
        .oneshot(get("/api/orders?status=NEW"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let orders: Vec<Order> = body_json(response).await;
    assert!(!orders.is_empty());
    assert!(orders.iter().all(|o| o.status == OrderStatus::New));
    for pair in orders.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn status_update_roundtrip_and_not_found_body() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/orders/order4/status",
            r#"{"status":"PREPARING"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let order: Order = body_json(response).await;
    assert_eq!(order.status, OrderStatus::Preparing);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/orders/missing/status",
            r#"{"status":"SENT"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn checkout_over_http_sets_new_status_and_total() {
    let app = app();

    // Grab a dish snapshot to submit
    let response = app
        .clone()
        .oneshot(get("/api/dishes?searchTerm=bruschetta"))
        .await
        .unwrap();
    let dishes: Vec<Dish> = body_json(response).await;
    let dish = &dishes[0];

    let payload = serde_json::json!({
        "customerName": "Beatriz Nunes",
        "customerPhone": "11912345678",
        "customerAddress": "Alameda Santos, 42",
        "items": [{ "dish": dish, "quantity": 2 }],
        "notes": "Interfone 12"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/orders", &payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let order: Order = body_json(response).await;
    assert_eq!(order.status, OrderStatus::New);
    // 2 × 25.00 + 5.00 delivery fee
    assert_eq!(order.total_amount, rust_decimal::Decimal::new(5500, 2));

    // It now heads the unfiltered list
    let response = app.oneshot(get("/api/orders")).await.unwrap();
    let orders: Vec<Order> = body_json(response).await;
    assert_eq!(orders[0].id, order.id);
}

#[tokio::test]
async fn sign_in_accepts_staff_and_rejects_bad_credentials() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/sign-in",
            r#"{"email":"admin@gourmetgo.com","password":"1234"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user: User = body_json(response).await;
    assert_eq!(user.email, "admin@gourmetgo.com");

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/sign-in",
            r#"{"email":"admin@gourmetgo.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["code"], "E0006");
}

#[tokio::test]
async fn settings_merge_write_over_http() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/settings",
            r#"{"deliveryFeeFixed":8.5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let settings: AppSettings = body_json(response).await;
    assert_eq!(settings.delivery_fee_fixed, rust_decimal::Decimal::new(850, 2));
    assert_eq!(settings.opening_time, "09:00");

    let response = app.oneshot(get("/api/settings")).await.unwrap();
    let fetched: AppSettings = body_json(response).await;
    assert_eq!(fetched.delivery_fee_fixed, rust_decimal::Decimal::new(850, 2));
}

#[tokio::test]
async fn dashboard_summary_reports_pending_backlog() {
    let app = app();
    let response = app.oneshot(get("/api/dashboard/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(response).await;
    // Seed backlog: order4 (NEW) + order3 (PREPARING)
    assert_eq!(body["pendingOrders"], 2);
}

#[tokio::test]
async fn deleting_a_missing_dish_is_not_an_error() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/dishes/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
