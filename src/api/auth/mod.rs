use actix_web::{web, Scope};

pub(crate) mod controller;
pub(crate) mod dtos;
mod error;
mod service;
pub mod session_guard;

/// Name of the HTTP-only session cookie.
pub const AUTH_COOKIE: &str = "auth";

pub(crate) fn auth_module() -> Scope {
    web::scope("/auth")
        .route("/login", web::post().to(controller::login))
        .route("/logout", web::post().to(controller::logout))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    use super::session_guard::SessionGuard;
    use super::*;
    use crate::app_context::AppContext;
    use crate::config_loader::{Auth, Config, Server, ServerMode};
    use crate::models::{envelope, token};

    fn test_context() -> Arc<AppContext> {
        Arc::new(AppContext::new(Config {
            server: Server {
                host: "127.0.0.1".to_string(),
                port: 0,
                mode: ServerMode::Development,
            },
            auth: Auth {
                admin_email: "admin@school.example".to_string(),
                admin_password: "pw123".to_string(),
                token_secret: "test-token-secret".to_string(),
                base_secret: "test-base-secret".to_string(),
                session_lifetime_secs: 86400,
            },
        }))
    }

    macro_rules! auth_app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::from($ctx.clone()))
                    .service(web::scope("/api").service(auth_module())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_plain_login_sets_cookie_and_returns_token() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@school.example",
                "password": "pw123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == AUTH_COOKIE)
            .expect("auth cookie missing");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        // development mode leaves the Secure attribute off
        assert_ne!(cookie.secure(), Some(true));
        let cookie_token = cookie.value().to_string();

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Login successful");
        let access_token = body["access_token"].as_str().unwrap();
        assert_eq!(access_token, cookie_token);
        let claims = token::verify(&ctx.config.auth.token_secret, access_token).unwrap();
        assert_eq!(claims.email, "admin@school.example");
    }

    #[actix_web::test]
    async fn test_wrong_password_is_401_invalid_password() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "admin@school.example",
                "password": "nope",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid password");
    }

    #[actix_web::test]
    async fn test_email_is_checked_before_password() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        // both fields wrong: the email error must win
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "intruder@school.example",
                "password": "nope",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email");
    }

    #[actix_web::test]
    async fn test_malformed_enc_data_is_400_before_any_decryption() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "encData": "not-base64 also-not" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid encrypted data format");
    }

    #[actix_web::test]
    async fn test_non_string_enc_data_is_400_not_a_credential_error() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        // the key alone selects the encrypted branch; a non-string value
        // must not fall through to a plain-credentials check
        for bad in [serde_json::json!(123), serde_json::Value::Null] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(serde_json::json!({ "encData": bad }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Invalid encrypted data format");
        }
    }

    #[actix_web::test]
    async fn test_encrypted_login_round_trip() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let payload = envelope::encrypt_payload(
            &ctx.config.auth.base_secret,
            &serde_json::json!({
                "email": "admin@school.example",
                "password": "pw123",
            }),
        )
        .unwrap();
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "encData": payload.enc_data }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_tampered_envelope_is_400_decryption_failed() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        // well-formed envelope sealed under a different base secret
        let foreign = envelope::encrypt(
            "some-other-base-secret",
            r#"{"email":"admin@school.example","password":"pw123"}"#,
        )
        .unwrap();
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({ "encData": foreign }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Decryption failed");
    }

    #[actix_web::test]
    async fn test_non_json_body_is_500() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_payload("definitely not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn test_logout_clears_cookie_even_without_one() {
        let ctx = test_context();
        let app = auth_app!(ctx);

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == AUTH_COOKIE)
            .expect("removal cookie missing");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }

    #[actix_web::test]
    async fn test_gate_redirects_protected_paths_to_login() {
        let ctx = test_context();
        let app = test::init_service(
            App::new()
                .wrap(SessionGuard(ctx.clone()))
                .app_data(web::Data::from(ctx.clone()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route("/login", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[actix_web::test]
    async fn test_gate_fails_open_for_api_on_unreadable_auth_header() {
        let ctx = test_context();
        let app = test::init_service(
            App::new()
                .wrap(SessionGuard(ctx.clone()))
                .app_data(web::Data::from(ctx.clone()))
                .route(
                    "/api/teachers",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                )
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        // header bytes that fail UTF-8 conversion during token extraction
        let unreadable = header::HeaderValue::from_bytes(b"Bearer \xff").unwrap();

        // API calls answer without a session rather than bouncing to a
        // login page no API client would render
        let req = test::TestRequest::get()
            .uri("/api/teachers")
            .insert_header((header::AUTHORIZATION, unreadable.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // the same header on a page route still redirects
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::AUTHORIZATION, unreadable))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_auth_header_requires_bearer_scheme() {
        let ctx = test_context();
        let access_token = token::issue(
            &ctx.config.auth.token_secret,
            "admin@school.example",
            token::DEFAULT_LIFETIME_MILLIS,
        );
        let app = test::init_service(
            App::new()
                .wrap(SessionGuard(ctx.clone()))
                .app_data(web::Data::from(ctx.clone()))
                .route(
                    "/api/teachers",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                )
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        // a Bearer token carries the session without a cookie
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::AUTHORIZATION, format!("Bearer {access_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // any other scheme is not treated as a session token
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::AUTHORIZATION, format!("Basic {access_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_gate_sends_authenticated_sessions_away_from_login() {
        let ctx = test_context();
        let access_token = token::issue(
            &ctx.config.auth.token_secret,
            "admin@school.example",
            token::DEFAULT_LIFETIME_MILLIS,
        );
        let app = test::init_service(
            App::new()
                .wrap(SessionGuard(ctx.clone()))
                .app_data(web::Data::from(ctx.clone()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route("/login", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/login")
            .cookie(Cookie::new(AUTH_COOKIE, access_token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        // and the same session passes straight through everywhere else
        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(AUTH_COOKIE, access_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
