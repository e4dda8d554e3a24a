//! Router-level tests over the in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use placement_api::{build_router, AppState};
use placement_infrastructure::MemoryStore;

fn app() -> Router {
    build_router(
        AppState::in_memory(MemoryStore::new()),
        &["http://localhost:3000".to_string()],
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_acme(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/company/create",
        Some(json!({
            "companyName": "Acme",
            "package": "8 LPA",
            "assignedOfficer": ["alice", "alice", " "]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/company/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "running");

    let (status, _) = send(&app, Method::GET, "/user/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn company_create_normalizes_officers() {
    let app = app();
    create_acme(&app).await;

    let (status, body) = send(&app, Method::GET, "/company/list/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    let companies = body["data"].as_array().unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0]["companyName"], "Acme");
    assert_eq!(companies[0]["assignedOfficer"], json!(["alice"]));

    let (_, body) = send(&app, Method::GET, "/company/list/bob", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn company_create_requires_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/company/create",
        Some(json!({ "companyName": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn revision_approval_flow() {
    let app = app();
    let company_id = create_acme(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/company/temp/update/{}", company_id),
        Some(json!({
            "company_name": "Acme",
            "package": "10 LPA",
            "assigned_officer": ["alice"],
            "created_by": "alice"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["company_id"], company_id.as_str());
    let revision_id = body["data"]["id"].as_str().unwrap().to_string();

    // relabelling as approved does not merge
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/company/temp/status/{}", revision_id),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");

    let (_, body) = send(&app, Method::GET, "/company/list", None).await;
    assert_eq!(body["data"][0]["package"], "8 LPA");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/company/temp/approve/{}", revision_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], company_id.as_str());
    assert_eq!(body["data"]["package"], "10 LPA");

    let (_, body) = send(&app, Method::GET, "/company/temp/list", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/company/temp/approve/{}", revision_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn revision_without_target_creates_company_on_approval() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/company/temp/update",
        Some(json!({ "company_name": "Globex", "created_by": "bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["company_id"].is_null());
    let revision_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, &format!("/company/temp/{}", revision_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["created_by"], "bob");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/company/temp/approve/{}", revision_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/company/list", None).await;
    assert_eq!(body["data"][0]["companyName"], "Globex");
}

#[tokio::test]
async fn malformed_ids_are_rejected() {
    let app = app();
    let (status, _) = send(&app, Method::PUT, "/company/temp/approve/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/company/delete/123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/company/temp/update",
        Some(json!({ "company_id": "xyz", "company_name": "Acme", "created_by": "bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_status_is_rejected() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::POST,
        "/company/temp/update",
        Some(json!({ "company_name": "Acme", "created_by": "bob" })),
    )
    .await;
    let revision_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/company/temp/status/{}", revision_id),
        Some(json!({ "status": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn events_listed_newest_date_first() {
    let app = app();
    for (date, title) in [("2025-01-10", "Kickoff"), ("2025-03-01", "Interviews")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/event/create",
            Some(json!({ "date": date, "type": "drive", "title": title, "created_by": "alice" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, Method::GET, "/event/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["title"], "Interviews");
    assert_eq!(body["data"][0]["type"], "drive");
    assert_eq!(body["data"][1]["date"], "2025-01-10");

    let (status, _) = send(
        &app,
        Method::POST,
        "/event/create",
        Some(json!({ "date": "10/01/2025", "type": "drive", "title": "Bad", "created_by": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_create_login_and_delete() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/user/create",
        Some(json!({
            "username": "alice",
            "password": "secret123",
            "email": "alice@example.com",
            "role": "admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "admin");
    assert!(body["data"].get("password_hash").is_none());
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        "/user/create",
        Some(json!({ "username": "alice", "password": "secret123", "email": "a@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/login",
        Some(json!({ "username": "alice", "password": "secret123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "alice");

    let (status, _) = send(
        &app,
        Method::POST,
        "/user/login",
        Some(json!({ "username": "alice", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, &format!("/user/delete/{}", user_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/user/list", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn user_roles_are_a_closed_set() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/user/create",
        Some(json!({
            "username": "mallory",
            "password": "secret123",
            "email": "mallory@example.com",
            "role": "superuser"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/create",
        Some(json!({
            "username": "olga",
            "password": "secret123",
            "email": "olga@example.com",
            "role": " "
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "officer");

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/create",
        Some(json!({
            "username": "ada",
            "password": "secret123",
            "email": "ada@example.com",
            "role": "Admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/company/list")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/company/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
