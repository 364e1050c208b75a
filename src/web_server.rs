use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use crate::api;
use crate::api::auth::session_guard::SessionGuard;
use crate::app_context::AppContext;
use crate::pages;

#[actix_web::main]
pub async fn run_actix_server(ctx: Arc<AppContext>) -> std::io::Result<()> {
    let (host, port) = ctx.config.server.listen_address();
    log::info!("starting HTTP server at http://{}:{}", host, port);

    let data = web::Data::from(ctx.clone());
    HttpServer::new(move || {
        App::new()
            // wraps run outermost-last: Logger sees every request, CORS sits
            // outside the session gate so redirects still carry its headers
            .wrap(SessionGuard(ctx.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(data.clone())
            .app_data(web::JsonConfig::default().limit(4096))
            .route("/", web::get().to(pages::dashboard))
            .route("/login", web::get().to(pages::login_page))
            .service(
                web::scope("/api")
                    .service(api::auth::auth_module())
                    .service(api::dashboard::dashboard_module()),
            )
            .service(api::docs::api_docs_module())
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
