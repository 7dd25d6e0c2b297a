//! Tests de integración de la API
//!
//! La app se arma con el cliente del backend sin configurar: los
//! endpoints de datos degradan a 503 y las validaciones locales cortan
//! antes de cualquier llamada de red.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_management::clients::supabase::SupabaseClient;
use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::routes::create_api_router;
use fleet_management::state::AppState;

fn create_test_app() -> Router {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: Vec::new(),
        supabase_url: None,
        supabase_anon_key: None,
    };
    let state = AppState::new(config, SupabaseClient::uninitialized());
    create_api_router().with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_vehicle_list_degrades_without_backend() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/vehicle").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BACKEND_NOT_INITIALIZED");
}

#[tokio::test]
async fn test_dashboard_degrades_without_backend() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_driver_license_validation_blocks_before_network() {
    let app = create_test_app();
    // Licencia de 6 dígitos: debe fallar con 400 de validación, no con el
    // 503 del backend sin configurar
    let request = post_json(
        "/api/driver",
        json!({
            "name": "Thandi Mokoena",
            "email": "thandi@fleet.test",
            "license": "SA100005",
            "contact": "0825551234"
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "License number must begin with 'SA' followed by 7 digits (e.g. SA1000005)."
    );
}

#[tokio::test]
async fn test_maintenance_log_rejects_past_date() {
    let app = create_test_app();
    let request = post_json(
        "/api/maintenance/log",
        json!({
            "vehicle": "CA123456",
            "service": "Oil change",
            "date": "2000-01-01",
            "cost": 450.0,
            "provider": "Speedy Auto"
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Cannot log a service with a past date.");
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = create_test_app();
    let request = post_json("/api/auth/login", json!({ "email": "", "password": "" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Please fill in all fields");
}

#[tokio::test]
async fn test_trip_date_required() {
    let app = create_test_app();
    let request = post_json(
        "/api/trip",
        json!({
            "vehicle": "CA123456",
            "driver_id": 1,
            "origin": "Cape Town",
            "destination": "Durban"
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Date is required.");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/fuel").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
