//! Per-request access gate.
//!
//! Every matched route passes through here: public paths go straight
//! through, unauthenticated or invalid sessions are redirected to the login
//! surface, and an authenticated session asking for the login page is sent
//! back to the dashboard. The decision itself is a pure function over
//! (path, token) so every branch is unit-testable without a server.

use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::http::header;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::app_context::AppContext;
use crate::models::token::{self, Claims};

use super::{service, AUTH_COOKIE};

const LOGIN_PAGE: &str = "/login";
const HOME_PAGE: &str = "/";

// Reachable without a session: the login surface, the auth API (logout must
// succeed even with no cookie), docs, and static assets.
fn is_public(path: &str) -> bool {
    path == "/api/auth/login"
        || path == "/api/auth/logout"
        || path.starts_with("/api-docs")
        || path.starts_with("/assets")
        || path == "/favicon.ico"
}

#[derive(Debug, PartialEq)]
pub enum GateDecision {
    Allow { claims: Option<Claims> },
    RedirectToLogin { clear_cookie: bool },
    RedirectToHome,
}

/// The decision procedure applied on every navigation.
pub fn decide(token_secret: &str, path: &str, session_token: Option<&str>) -> GateDecision {
    if is_public(path) {
        return GateDecision::Allow { claims: None };
    }

    let is_login_page = path == LOGIN_PAGE;
    let Some(raw) = session_token else {
        return if is_login_page {
            GateDecision::Allow { claims: None }
        } else {
            GateDecision::RedirectToLogin { clear_cookie: false }
        };
    };

    match token::verify(token_secret, raw) {
        // an authenticated session has no business on the login page
        Ok(_) if is_login_page => GateDecision::RedirectToHome,
        Ok(claims) => GateDecision::Allow {
            claims: Some(claims),
        },
        // never redirect the login page to itself
        Err(_) if is_login_page => GateDecision::Allow { claims: None },
        Err(_) => GateDecision::RedirectToLogin { clear_cookie: true },
    }
}

// There are two steps in middleware processing.
// 1. Middleware initialization, middleware factory gets called with
//    next service in chain as parameter.
// 2. Middleware's call method gets called with normal request.
pub struct SessionGuard(pub Arc<AppContext>);

// Middleware factory is `Transform` trait
// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardService {
            service,
            ctx: self.0.clone(),
        }))
    }
}

pub struct SessionGuardService<S> {
    service: S,
    ctx: Arc<AppContext>,
}

impl<S, B> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let decision = match extract_token(&req) {
            Ok(session_token) => decide(
                &self.ctx.config.auth.token_secret,
                req.path(),
                session_token.as_deref(),
            ),
            // Unexpected extraction failures fail closed, except API routes,
            // which fall through so the endpoint can answer with a
            // structured error instead of an HTML redirect.
            Err(_) if req.path().starts_with("/api") => GateDecision::Allow { claims: None },
            Err(_) => GateDecision::RedirectToLogin { clear_cookie: false },
        };

        match decision {
            GateDecision::Allow { claims } => {
                if let Some(claims) = claims {
                    req.extensions_mut().insert(claims);
                }
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            GateDecision::RedirectToLogin { clear_cookie } => {
                let mut builder = HttpResponse::Found();
                builder.insert_header((header::LOCATION, LOGIN_PAGE));
                if clear_cookie {
                    builder.cookie(service::removal_cookie(&self.ctx));
                }
                let response = builder.finish().map_into_right_body();
                let (request, _) = req.into_parts();
                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
            GateDecision::RedirectToHome => {
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, HOME_PAGE))
                    .finish()
                    .map_into_right_body();
                let (request, _) = req.into_parts();
                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
        }
    }
}

// Session cookie first, `Authorization: Bearer` as the header-based
// alternative for API calls.
fn extract_token(req: &ServiceRequest) -> Result<Option<String>, ()> {
    if let Some(cookie) = req.cookie(AUTH_COOKIE) {
        return Ok(Some(cookie.value().to_string()));
    }
    match req.headers().get(header::AUTHORIZATION) {
        None => Ok(None),
        Some(value) => {
            let value = value.to_str().map_err(|_| ())?;
            let mut parts = value.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("Bearer"), Some(access_token)) => Ok(Some(access_token.to_string())),
                _ => Err(()),
            }
        }
    }
}
