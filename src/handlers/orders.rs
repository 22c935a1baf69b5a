use axum::extract::{Extension, State};

use crate::db::AppState;
use crate::error::Result;
use crate::extractors::{Json, Path};
use crate::models::Principal;
use crate::orders;
use crate::readmodel::OrderDetail;

/// `GET /orders/{id}` — retrieve one order on behalf of the authenticated
/// principal. Outcome mapping lives in the retrieval service.
pub async fn get_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderDetail>> {
    let conn = state.db.get()?;
    let detail = orders::find_order(&conn, &principal, order_id)?;
    Ok(Json(detail))
}
