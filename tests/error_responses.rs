//! Error responses are consistent JSON: {timestamp, status, error}.

use axum::http::StatusCode;

mod common;
use common::*;

#[tokio::test]
async fn test_not_found_body_shape() {
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;

    let response = get(&app, "/orders/1000", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Order not found");
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_unauthorized_body_is_minimal() {
    let app = test_app();

    let response = get(&app, "/orders/1", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["status"], 401);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn test_non_numeric_order_id_is_bad_request() {
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;

    let response = get(&app, "/orders/abc", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
}
