use serde::{Deserialize, Serialize};

/// Custom claims carried by an access token (non-standard JWT claims).
/// Standard claims (iss, sub, jti, iat, exp) are handled by jwt-simple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Login identity (email).
    pub username: String,
    /// Granted authorities, e.g. `ROLE_CLIENT`, `ROLE_ADMIN`.
    pub authorities: Vec<String>,
}
