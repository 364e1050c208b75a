use actix_web::{web, HttpResponse, Result};

use crate::app_context::AppContext;

use super::dtos::{LoginRequest, LoginResponse, MessageResponse};
use super::error::AuthError;
use super::service;

/// Authenticate the admin identity and open a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened, auth cookie set", body = LoginResponse),
        (status = 400, description = "Malformed or undecryptable envelope"),
        (status = 401, description = "Email or password mismatch"),
        (status = 500, description = "Unexpected error")
    )
)]
pub(crate) async fn login(
    ctx: web::Data<AppContext>,
    body: web::Bytes,
) -> Result<HttpResponse, AuthError> {
    // Body parsing happens here rather than via the Json extractor so that a
    // non-JSON body surfaces as a 500 with the parse error, matching the
    // endpoint's documented failure modes.
    let body: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| AuthError::ServerError(e.to_string()))?;

    let access_token = service::login(&ctx, body)?;
    log::info!("session opened for {}", ctx.config.auth.admin_email);

    Ok(HttpResponse::Ok()
        .cookie(service::session_cookie(&ctx, &access_token))
        .json(LoginResponse {
            message: "Login successful".to_string(),
            access_token,
        }))
}

/// Close the session by clearing the auth cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Cookie cleared, even if none was present", body = MessageResponse)
    )
)]
pub(crate) async fn logout(ctx: web::Data<AppContext>) -> Result<HttpResponse, AuthError> {
    Ok(HttpResponse::Ok()
        .cookie(service::removal_cookie(&ctx))
        .json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }))
}
