use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ed25519_dalek::{SigningKey, VerifyingKey};
use jwt_simple::prelude::*;
use rand::rngs::OsRng;

use crate::error::{AppError, Result};

use super::AccessTokenClaims;

const ISSUER: &str = "orderdesk";

/// Generate a new Ed25519 key pair.
/// Returns (private_key_bytes, public_key_base64)
pub fn generate_keypair() -> (Vec<u8>, String) {
    let signing_key = SigningKey::generate(&mut OsRng);
    let verifying_key = signing_key.verifying_key();

    let private_bytes = signing_key.to_bytes().to_vec();
    let public_b64 = BASE64.encode(verifying_key.to_bytes());

    (private_bytes, public_b64)
}

/// Derive the base64 public key from a 32-byte Ed25519 seed.
pub fn public_key_from_seed(seed: &[u8]) -> Result<String> {
    let key_bytes: [u8; 32] = seed
        .try_into()
        .map_err(|_| AppError::Internal("Signing key must be 32 bytes".into()))?;
    let signing_key = SigningKey::from_bytes(&key_bytes);
    Ok(BASE64.encode(signing_key.verifying_key().to_bytes()))
}

/// Sign access-token claims with an Ed25519 private key.
pub fn sign_access_token(
    claims: &AccessTokenClaims,
    private_key: &[u8],
    subject: &str,
    ttl_secs: u64,
) -> Result<String> {
    let key_bytes: [u8; 32] = private_key
        .try_into()
        .map_err(|_| AppError::Internal("Invalid private key length".into()))?;

    let signing_key = SigningKey::from_bytes(&key_bytes);
    let key_pair = Ed25519KeyPair::from_bytes(&signing_key.to_keypair_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to create key pair: {}", e)))?;

    let jwt_claims = Claims::with_custom_claims(claims.clone(), Duration::from_secs(ttl_secs))
        .with_issuer(ISSUER)
        .with_subject(subject)
        .with_jwt_id(uuid::Uuid::new_v4().to_string());

    let token = key_pair
        .sign(jwt_claims)
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

    Ok(token)
}

/// Verify an access token and extract its claims.
///
/// Every verification failure collapses to `Unauthorized`: a forged or
/// expired token must never surface as a server error, and must not leak
/// why it was rejected.
pub fn verify_access_token(
    token: &str,
    public_key_b64: &str,
) -> Result<JWTClaims<AccessTokenClaims>> {
    let public_bytes = BASE64
        .decode(public_key_b64)
        .map_err(|e| AppError::Internal(format!("Invalid public key encoding: {}", e)))?;

    let key_bytes: [u8; 32] = public_bytes
        .as_slice()
        .try_into()
        .map_err(|_| AppError::Internal("Invalid public key length".into()))?;

    let verifying_key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|e| AppError::Internal(format!("Invalid public key: {}", e)))?;

    let public_key = Ed25519PublicKey::from_bytes(&verifying_key.to_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to create public key: {}", e)))?;

    let options = VerificationOptions {
        allowed_issuers: Some([ISSUER.to_string()].into_iter().collect()),
        ..Default::default()
    };

    public_key
        .verify_token::<AccessTokenClaims>(token, Some(options))
        .map_err(|_| AppError::Unauthorized)
}
