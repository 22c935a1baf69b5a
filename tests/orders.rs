//! Tests for GET /orders/{id}: the full identity × role × existence matrix.

use axum::http::StatusCode;
use serde_json::Value;

mod common;
use common::*;

fn item_names(json: &Value) -> Vec<&str> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

fn assert_order_one_body(json: &Value) {
    assert_eq!(json["id"], 1);
    assert_eq!(json["moment"], "2022-07-25T13:00:00Z");
    assert_eq!(json["status"], "PAID");
    assert_eq!(json["client"]["name"], "Maria Brown");
    assert_eq!(json["payment"]["moment"], "2022-07-25T15:00:00Z");
    let names = item_names(json);
    assert!(names.contains(&"The Lord of the Rings"));
    assert!(names.contains(&"Macbook Pro"));
    assert_eq!(json["total"], 1431.0);
}

#[tokio::test]
async fn test_admin_can_read_any_order() {
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;

    let response = get(&app, "/orders/1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_order_one_body(&body_json(response).await);
}

#[tokio::test]
async fn test_client_can_read_own_order() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    let response = get(&app, "/orders/1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_order_one_body(&body_json(response).await);
}

#[tokio::test]
async fn test_client_cannot_read_another_clients_order() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    // Order 2 belongs to Alex
    let response = get(&app, "/orders/2", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Access denied. Should be self or admin");
}

#[tokio::test]
async fn test_missing_order_is_not_found_for_admin() {
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;

    let response = get(&app, "/orders/1000", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_order_is_not_found_for_client() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    let response = get(&app, "/orders/1000", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tampered_token_is_unauthorized() {
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;
    let tampered = format!("{}xpto", token);

    let response = get(&app, "/orders/1", Some(&tampered)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = test_app();

    let response = get(&app, "/orders/1", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthorized_wins_over_not_found() {
    // 401 must be returned even for nonexistent ids, so an invalid token
    // learns nothing about which orders exist
    let app = test_app();
    let token = obtain_access_token(&app, ALEX, PASSWORD).await;
    let tampered = format!("{}xpto", token);

    let response = get(&app, "/orders/1000", Some(&tampered)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unpaid_order_has_no_payment_field() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    // Order 3 is WAITING_PAYMENT
    let response = get(&app, "/orders/3", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "WAITING_PAYMENT");
    assert!(json.get("payment").is_none());
    assert_eq!(json["total"], 90.5);
}

#[tokio::test]
async fn test_item_subtotals_and_decimal_total() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    let response = get(&app, "/orders/1", Some(&token)).await;
    let json = body_json(response).await;

    let items = json["items"].as_array().unwrap();
    for item in items {
        let expected = item["price"].as_f64().unwrap() * item["quantity"].as_f64().unwrap();
        assert_eq!(item["subTotal"].as_f64().unwrap(), expected);
    }
    // 2 x 90.5 + 1 x 1250.0, computed in decimal arithmetic
    assert_eq!(json["total"], 1431.0);
}

#[tokio::test]
async fn test_repeated_reads_are_byte_identical() {
    let app = test_app();
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    let first = body_bytes(get(&app, "/orders/1", Some(&token)).await).await;
    let second = body_bytes(get(&app, "/orders/1", Some(&token)).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dangling_product_reference_is_internal_error() {
    let state = create_test_app_state();
    {
        let conn = state.db.get().unwrap();
        // Order 4 for Maria with an item pointing at a product that does not exist
        conn.execute_batch(
            "INSERT INTO orders (id, moment, status, client_id)
                VALUES (4, 1658754000, 'WAITING_PAYMENT', 1);
             INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES (4, 9999, 1, '10.00');",
        )
        .unwrap();
    }
    let app = app(state);
    let token = obtain_access_token(&app, MARIA, PASSWORD).await;

    let response = get(&app, "/orders/4", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Internal detail must not leak
    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal server error");
}
