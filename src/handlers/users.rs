use axum::extract::{Extension, State};

use crate::db::{queries, AppState};
use crate::error::{AppError, Result};
use crate::extractors::Json;
use crate::models::{Principal, User};

/// `GET /users/me` — the authenticated caller's stored profile.
pub async fn me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<User>> {
    let conn = state.db.get()?;
    // The token was valid, but the account may have been removed since issue
    let user =
        queries::get_user_by_email(&conn, &principal.email)?.ok_or(AppError::Unauthorized)?;
    Ok(Json(user))
}
