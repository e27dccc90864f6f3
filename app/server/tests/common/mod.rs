#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use server::{build_app, create_pool, AppState, Config, CorsOrigins};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    // Keeps the database directory alive for the duration of the test
    pub dir: tempfile::TempDir,
}

pub async fn test_pool() -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path());
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .unwrap();
    (pool, dir)
}

pub async fn test_app() -> TestApp {
    test_app_with_cors(CorsOrigins::Any).await
}

pub async fn test_app_with_cors(origins: CorsOrigins) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path()).with_cors_allow_origins(origins);
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .unwrap();
    let router = build_app(AppState::new(pool.clone(), config));
    TestApp { router, pool, dir }
}

pub async fn api(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::json!(null)
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::json!(null))
    };
    (status, json)
}

pub fn widget() -> serde_json::Value {
    serde_json::json!({
        "name": "Widget",
        "retirement_date": "2025-01-01",
        "units": 10,
        "sap_code": "SAP1"
    })
}
