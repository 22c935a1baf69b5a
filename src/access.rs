//! Order access policy.
//!
//! Pure decision over a principal's role set and the order's owning client
//! identity. No I/O happens here; the retrieval service feeds it a loaded
//! order and maps a denial to the HTTP outcome.

use crate::models::Principal;

/// Caller-facing message for a denied order access.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. Should be self or admin";

/// Outcome of an access check. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Permitted,
    /// Internal reason, for logs only. The caller always sees
    /// [`ACCESS_DENIED_MESSAGE`].
    Denied(&'static str),
}

/// Decide whether `principal` may view an order owned by `owner_email`.
///
/// Admins may view any order. Clients may view their own orders, where
/// ownership is compared by identity (email), not by object identity.
/// Any other role composition is denied.
pub fn can_view_order(principal: &Principal, owner_email: &str) -> AccessDecision {
    if principal.is_admin() {
        return AccessDecision::Permitted;
    }
    if principal.is_client() {
        if principal.email == owner_email {
            return AccessDecision::Permitted;
        }
        return AccessDecision::Denied("ownership mismatch");
    }
    AccessDecision::Denied("no applicable role")
}
