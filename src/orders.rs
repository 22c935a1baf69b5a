//! Order retrieval service.
//!
//! Orchestrates a single "get order by id": repository lookup, access
//! policy, read-model assembly. The check order is fixed and load-bearing:
//! authentication happens upstream in the middleware (401 before anything
//! else), existence is checked before ownership (404 before 403), and only
//! an authorized, loaded order reaches the assembler.

use rusqlite::Connection;

use crate::access::{self, AccessDecision, ACCESS_DENIED_MESSAGE};
use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::Principal;
use crate::readmodel::{self, OrderDetail};

/// Retrieve the read-model for one order on behalf of `principal`.
pub fn find_order(conn: &Connection, principal: &Principal, order_id: i64) -> Result<OrderDetail> {
    let aggregate = queries::get_order_aggregate(conn, order_id)?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    match access::can_view_order(principal, &aggregate.header.client_email) {
        AccessDecision::Permitted => {}
        AccessDecision::Denied(reason) => {
            tracing::debug!(order_id, reason, user = %principal.email, "order access denied");
            return Err(AppError::Forbidden(ACCESS_DENIED_MESSAGE.into()));
        }
    }

    readmodel::assemble_order(&aggregate)
}
