//! Principal resolution: bearer token in, authenticated principal out.

use crate::error::{AppError, Result};
use crate::models::{Principal, Role};

use super::signing::verify_access_token;

/// Resolve a bearer token into an authenticated [`Principal`].
///
/// Any failure here (bad signature, expiry, missing subject, no usable
/// roles) is an authentication failure, never a server error.
pub fn resolve_principal(token: &str, public_key_b64: &str) -> Result<Principal> {
    let verified = verify_access_token(token, public_key_b64)?;

    let user_id: i64 = verified
        .subject
        .as_deref()
        .and_then(|s| s.parse().ok())
        .ok_or(AppError::Unauthorized)?;

    let roles: Vec<Role> = verified
        .custom
        .authorities
        .iter()
        .filter_map(|a| Role::from_str(a))
        .collect();

    // A principal always has at least one role when authentication succeeds
    if roles.is_empty() {
        return Err(AppError::Unauthorized);
    }

    Ok(Principal {
        user_id,
        email: verified.custom.username,
        roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{generate_keypair, sign_access_token, AccessTokenClaims};

    #[test]
    fn test_resolves_principal_with_roles() {
        let (private_key, public_key) = generate_keypair();
        let claims = AccessTokenClaims {
            username: "alex@example.com".to_string(),
            authorities: vec!["ROLE_CLIENT".to_string(), "ROLE_ADMIN".to_string()],
        };
        let token = sign_access_token(&claims, &private_key, "2", 3600).unwrap();

        let principal = resolve_principal(&token, &public_key).unwrap();
        assert_eq!(principal.user_id, 2);
        assert_eq!(principal.email, "alex@example.com");
        assert!(principal.is_admin());
        assert!(principal.is_client());
    }

    #[test]
    fn test_unknown_authorities_are_unauthorized() {
        let (private_key, public_key) = generate_keypair();
        let claims = AccessTokenClaims {
            username: "bot@example.com".to_string(),
            authorities: vec!["ROLE_SERVICE".to_string()],
        };
        let token = sign_access_token(&claims, &private_key, "3", 3600).unwrap();

        let err = resolve_principal(&token, &public_key).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let (_, public_key) = generate_keypair();
        let err = resolve_principal("not-a-token", &public_key).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
