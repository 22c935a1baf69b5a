//! Bearer-token authentication middleware.
//!
//! Resolves the `Authorization: Bearer` header into a [`Principal`] and
//! inserts it as a request extension. Runs before any handler, so an
//! invalid or absent token yields 401 without touching the repository —
//! authentication failures never reveal whether a resource exists.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::resolve_principal;
use crate::db::AppState;
use crate::error::AppError;

/// Extract a Bearer token from the Authorization header.
///
/// Returns the token string without the "Bearer " prefix, or None if
/// the header is missing, malformed, or empty after the prefix.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;

    let principal = resolve_principal(token, &state.keys.public_key)?;

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
