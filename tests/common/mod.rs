//! Test utilities and fixtures for Orderdesk integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde_json::Value;
use tower::ServiceExt;

pub use orderdesk::auth;
pub use orderdesk::db::{init_db, seed, AppState, TokenKeys};
pub use orderdesk::handlers;
pub use orderdesk::models::*;

pub const MARIA: &str = "maria@gmail.com";
pub const ALEX: &str = "alex@gmail.com";
pub const PASSWORD: &str = "123456";

/// Create an AppState over an in-memory database with the demo fixture
/// seeded. Pool size 1 so every request sees the same in-memory database.
pub fn create_test_app_state() -> AppState {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        init_db(&conn).unwrap();
        seed::seed_demo_data(&conn).unwrap();
    }

    let (signing_key, public_key) = auth::generate_keypair();

    AppState {
        db: pool,
        keys: TokenKeys {
            signing_key,
            public_key,
        },
        token_ttl_secs: 3600,
        base_url: "http://localhost:8080".to_string(),
    }
}

/// Build the full application router over a test state.
pub fn app(state: AppState) -> Router {
    handlers::router(state.clone()).with_state(state)
}

/// Build a ready-to-use app over a freshly seeded state.
pub fn test_app() -> Router {
    app(create_test_app_state())
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Response should be valid JSON")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Send a GET request, optionally with a bearer token.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
pub async fn obtain_access_token(app: &Router, username: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response should carry an access token")
        .to_string()
}
