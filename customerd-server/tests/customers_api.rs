//! Router-level tests against the in-process store

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use customerd_server::{build_router, AppState, MemoryStore, ServerConfig};

fn app() -> Router {
    build_router(AppState::new(MemoryStore::new()), &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({"name": "Alice", "email": "a@x.com", "phone": "123", "kyc_status": true})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Customer added successfully");
    let id = body["customer"]["customer_id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "customer_id": id,
            "name": "Alice",
            "email": "a@x.com",
            "phone": "123",
            "kyc_status": true
        })
    );
}

#[tokio::test]
async fn kyc_status_defaults_to_false() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({"name": "Bob", "email": "b@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["customer"]["kyc_status"], false);
    assert_eq!(body["customer"]["phone"], Value::Null);
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let app = app();
    for name in ["Carol", "Alice", "Bob"] {
        let (status, _) = send(
            &app,
            "POST",
            "/customers",
            Some(json!({"name": name, "email": format!("{name}@x.com")})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Drop the middle one so ids are not contiguous
    let (status, _) = send(&app, "DELETE", "/customers/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["customer_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn list_of_empty_table_is_empty_array() {
    let (status, body) = send(&app(), "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = app();
    send(
        &app,
        "POST",
        "/customers",
        Some(json!({"name": "Alice", "email": "a@x.com", "phone": "123", "kyc_status": true})),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/customers/1",
        Some(json!({"name": "Alicia", "email": "alicia@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Customer updated successfully");
    assert_eq!(
        body["customer"],
        json!({
            "customer_id": 1,
            "name": "Alicia",
            "email": "alicia@x.com",
            "phone": null,
            "kyc_status": null
        })
    );
}

#[tokio::test]
async fn update_missing_id_is_404_without_mutation() {
    let app = app();
    send(
        &app,
        "POST",
        "/customers",
        Some(json!({"name": "Alice", "email": "a@x.com"})),
    )
    .await;
    let (_, before) = send(&app, "GET", "/customers", None).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/customers/999",
        Some(json!({"name": "Ghost", "email": "g@x.com", "phone": null, "kyc_status": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Customer not found"}));

    let (_, after) = send(&app, "GET", "/customers", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn delete_twice_is_200_then_404() {
    let app = app();
    send(
        &app,
        "POST",
        "/customers",
        Some(json!({"name": "Alice", "email": "a@x.com"})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Customer deleted successfully"}));

    let (status, _) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Customer not found"}));
}

#[tokio::test]
async fn missing_required_field_surfaces_store_error() {
    let (status, body) = send(
        &app(),
        "POST",
        "/customers",
        Some(json!({"email": "nobody@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not-null constraint"));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let router = app();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/customers")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &router,
        "POST",
        "/customers",
        Some(json!({"name": "Eve", "email": "e@x.com", "kyc_status": "yes"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let (status, body) = send(&app(), "GET", "/customers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "customer id: must be an integer");
}

#[tokio::test]
async fn undecodable_path_id_reports_path_error() {
    // %FF is not valid UTF-8, so the path segment never reaches id parsing
    let (status, body) = send(&app(), "GET", "/customers/%FF", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("cannot be empty"), "{message}");
}

#[tokio::test]
async fn store_failure_is_500_with_message() {
    let app = build_router(
        AppState::new(MemoryStore::failing("connection refused")),
        &ServerConfig::default(),
    );

    for (method, uri, body) in [
        ("GET", "/customers", None),
        ("GET", "/customers/1", None),
        ("DELETE", "/customers/1", None),
        ("POST", "/customers", Some(json!({"name": "A", "email": "a@x.com"}))),
        ("PUT", "/customers/1", Some(json!({"name": "A", "email": "a@x.com"}))),
    ] {
        let (status, json_body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(json_body, json!({"error": "connection refused"}));
    }
}

#[tokio::test]
async fn liveness_and_readiness_ignore_store() {
    let app = build_router(
        AppState::new(MemoryStore::failing("connection refused")),
        &ServerConfig::default(),
    );

    assert_eq!(send_text(&app, "/health").await, (StatusCode::OK, "OK".to_string()));
    assert_eq!(
        send_text(&app, "/").await,
        (StatusCode::OK, "Customer service running".to_string())
    );

    let (status, body) = send_text(&app, "/db-check").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "DB connection failed: connection refused");
}

#[tokio::test]
async fn db_check_embeds_timestamp() {
    let (status, body) = send_text(&app(), "/db-check").await;
    assert_eq!(status, StatusCode::OK);
    let stamp = body
        .strip_prefix("DB connected. Server time now: ")
        .expect("unexpected db-check body");
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}
