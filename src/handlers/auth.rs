use axum::extract::State;

use crate::auth::{self, password, AccessTokenClaims};
use crate::db::{queries, AppState};
use crate::error::{AppError, Result};
use crate::extractors::Json;
use crate::models::{LoginRequest, TokenResponse};

/// Exchange username/password credentials for a bearer token.
///
/// Unknown users and wrong passwords both map to a bare 401 so the
/// response does not disclose which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let conn = state.db.get()?;

    let user =
        queries::get_user_by_email(&conn, &input.username)?.ok_or(AppError::Unauthorized)?;

    if !password::verify_password(&input.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let claims = AccessTokenClaims {
        username: user.email.clone(),
        authorities: user.roles.iter().map(|r| r.as_str().to_string()).collect(),
    };

    let token = auth::sign_access_token(
        &claims,
        &state.keys.signing_key,
        &user.id.to_string(),
        state.token_ttl_secs,
    )?;

    tracing::debug!(user = %user.email, "issued access token");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "Bearer",
        expires_in: state.token_ttl_secs,
    }))
}
