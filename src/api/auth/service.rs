use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::app_context::AppContext;
use crate::models::{envelope, token};

use super::dtos::{EncryptedLogin, LoginRequest, PlainLogin};
use super::error::AuthError;
use super::AUTH_COOKIE;

/// Validates credentials and issues a session token.
///
/// Encrypted bodies are structurally checked before any cipher work, then
/// decrypted and parsed back into plain credentials. Email is compared before
/// password and the 401 names the failing field; this mirrors the deployed
/// behavior even though it tells a scripted attacker which field was wrong.
pub(crate) fn login(ctx: &AppContext, body: serde_json::Value) -> Result<String, AuthError> {
    let credentials = match parse_login_request(body)? {
        LoginRequest::Encrypted(body) => {
            if !envelope::is_valid_format(&body.enc_data) {
                return Err(AuthError::InvalidEncryptedFormat);
            }
            let plaintext = envelope::decrypt(&ctx.config.auth.base_secret, &body.enc_data)
                .map_err(|_| AuthError::DecryptionFailed)?;
            serde_json::from_str::<PlainLogin>(&plaintext)
                .map_err(|_| AuthError::DecryptionFailed)?
        }
        LoginRequest::Plain(plain) => plain,
    };

    if credentials.email != ctx.config.auth.admin_email {
        return Err(AuthError::InvalidEmail);
    }
    if credentials.password != ctx.config.auth.admin_password {
        return Err(AuthError::InvalidPassword);
    }

    Ok(token::issue(
        &ctx.config.auth.token_secret,
        &credentials.email,
        session_lifetime_millis(ctx),
    ))
}

/// Picks the login variant by the presence of the `encData` key. An `encData`
/// that is present but not a string is rejected up front instead of falling
/// through to the plain shape.
fn parse_login_request(mut body: serde_json::Value) -> Result<LoginRequest, AuthError> {
    match body.get_mut("encData") {
        Some(serde_json::Value::String(enc_data)) => Ok(LoginRequest::Encrypted(EncryptedLogin {
            enc_data: std::mem::take(enc_data),
        })),
        Some(_) => Err(AuthError::InvalidEncryptedFormat),
        None => Ok(LoginRequest::Plain(
            serde_json::from_value(body).unwrap_or_default(),
        )),
    }
}

fn session_lifetime_millis(ctx: &AppContext) -> i64 {
    ctx.config.auth.session_lifetime_secs as i64 * 1000
}

/// HTTP-only lax cookie carrying the session token, `Secure` outside
/// development.
pub(crate) fn session_cookie(ctx: &AppContext, access_token: &str) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, access_token.to_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(ctx.config.server.is_production())
        .path("/")
        .max_age(Duration::seconds(ctx.config.auth.session_lifetime_secs as i64))
        .finish()
}

/// Expired cookie that instructs the browser to drop the session.
pub(crate) fn removal_cookie(ctx: &AppContext) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, "")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(ctx.config.server.is_production())
        .path("/")
        .max_age(Duration::ZERO)
        .finish()
}
