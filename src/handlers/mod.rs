mod auth;
mod orders;
mod products;
mod users;

pub use auth::*;
pub use orders::*;
pub use products::*;
pub use users::*;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::AppState;
use crate::middleware::require_auth;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router<AppState> {
    // Public endpoints (no auth)
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(login))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product));

    // Authenticated endpoints: the auth middleware runs before any lookup,
    // so 401 always wins over 404
    let protected = Router::new()
        .route("/orders/{id}", get(get_order))
        .route("/users/me", get(me))
        .layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
