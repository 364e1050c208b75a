//! Client-held authentication state.
//!
//! The browser side of the dashboard keeps `{access_token, is_authenticated,
//! error}`-shaped state and never sees the signing secret. Instead of an
//! ambient global store, the state is an explicit object produced by a
//! rehydration step: read whatever token was persisted, revalidate it, and
//! build the state from the outcome. Page handlers reuse the same step to
//! render the signed-in identity from the session cookie.

use super::token;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub is_authenticated: bool,
    pub email: Option<String>,
    pub error: Option<String>,
}

impl SessionState {
    /// Rebuilds auth state from a persisted token, revalidating it against
    /// the server secret. An absent token yields the signed-out state; an
    /// invalid or expired one yields signed-out state with the error recorded.
    pub fn rehydrate(token_secret: &str, persisted_token: Option<&str>) -> Self {
        let Some(raw) = persisted_token else {
            return Self::default();
        };
        match token::verify(token_secret, raw) {
            Ok(claims) => Self {
                access_token: Some(raw.to_string()),
                is_authenticated: true,
                email: Some(claims.email),
                error: None,
            },
            Err(e) => Self {
                error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }
}

/// Authorization header value for API calls that carry the token as a
/// bearer value instead of the cookie.
pub fn bearer_header(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}
