//! Stateless signed session tokens.
//!
//! A token is `base64url(claims_json) "." base64url(hmac_sha256(claims))`
//! signed with the server-held token secret. There is no server-side session
//! table and no revocation list: logout only removes the client-held cookie,
//! a valid unexpired token is always accepted.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use ring::hmac;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

use super::crypto::get_current_timestamp_millis;

pub const DEFAULT_LIFETIME_MILLIS: i64 = 24 * 60 * 60 * 1000; // 1 day

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Claims {
    /// Email associated with the token
    pub email: String,
    /// Issued-at time, epoch milliseconds
    pub timestamp: i64,
    /// Expiry time, epoch milliseconds
    pub exp: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    InvalidSignature,
    Expired,
}

impl Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "Malformed auth token"),
            TokenError::InvalidSignature => write!(f, "Invalid auth token signature"),
            TokenError::Expired => write!(f, "Auth token has expired"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Issues a signed token for `email` expiring `lifetime_millis` from now.
pub fn issue(secret: &str, email: &str, lifetime_millis: i64) -> String {
    issue_at(secret, email, get_current_timestamp_millis(), lifetime_millis)
}

// Issued-at is a parameter so expiry boundaries are testable.
pub(crate) fn issue_at(secret: &str, email: &str, issued_at: i64, lifetime_millis: i64) -> String {
    let claims = serde_json::json!({
        "email": email,
        "timestamp": issued_at,
        "exp": issued_at + lifetime_millis,
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    let signature = hmac::sign(&key, payload.as_bytes());

    format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature.as_ref()))
}

/// Verifies signature (constant-time) and expiry; returns the claims.
pub fn verify(secret: &str, token: &str) -> Result<Claims, TokenError> {
    let (payload, signature_base64) = token.split_once('.').ok_or(TokenError::Malformed)?;
    let signature = URL_SAFE_NO_PAD
        .decode(signature_base64)
        .map_err(|_| TokenError::Malformed)?;

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    hmac::verify(&key, payload.as_bytes(), &signature)
        .map_err(|_| TokenError::InvalidSignature)?;

    let claims_bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    let claims: Claims =
        serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::Malformed)?;

    if get_current_timestamp_millis() >= claims.exp {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "token-test-secret";
    const HOUR_MILLIS: i64 = 60 * 60 * 1000;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue(SECRET, "admin@school.example", DEFAULT_LIFETIME_MILLIS);
        let claims = verify(SECRET, &token).unwrap();
        assert_eq!(claims.email, "admin@school.example");
        assert_eq!(claims.exp, claims.timestamp + DEFAULT_LIFETIME_MILLIS);
    }

    #[test]
    fn test_token_valid_one_hour_after_issuance() {
        let issued_at = get_current_timestamp_millis() - HOUR_MILLIS;
        let token = issue_at(SECRET, "a@b.c", issued_at, DEFAULT_LIFETIME_MILLIS);
        assert!(verify(SECRET, &token).is_ok());
    }

    #[test]
    fn test_token_expired_twenty_five_hours_after_issuance() {
        let issued_at = get_current_timestamp_millis() - 25 * HOUR_MILLIS;
        let token = issue_at(SECRET, "a@b.c", issued_at, DEFAULT_LIFETIME_MILLIS);
        assert_eq!(verify(SECRET, &token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_fails_regardless_of_expiry() {
        let token = issue(SECRET, "a@b.c", DEFAULT_LIFETIME_MILLIS);
        assert_eq!(
            verify("a-different-secret", &token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_fails_signature_check() {
        let token = issue(SECRET, "a@b.c", DEFAULT_LIFETIME_MILLIS);
        let (payload, signature) = token.split_once('.').unwrap();
        let forged_claims = serde_json::json!({
            "email": "intruder@school.example",
            "timestamp": 0,
            "exp": i64::MAX,
        });
        let forged = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(forged_claims.to_string()),
            signature
        );
        assert_eq!(verify(SECRET, &forged), Err(TokenError::InvalidSignature));
        // sanity: the untouched payload still verifies
        let intact = format!("{}.{}", payload, signature);
        assert!(verify(SECRET, &intact).is_ok());
    }

    #[test]
    fn test_garbage_tokens_are_malformed() {
        assert_eq!(verify(SECRET, ""), Err(TokenError::Malformed));
        assert_eq!(verify(SECRET, "no-separator"), Err(TokenError::Malformed));
        assert_eq!(verify(SECRET, "abc.!!!"), Err(TokenError::Malformed));
    }
}
