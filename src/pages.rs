//! Server-rendered page shells. The gate guarantees `/` is only reached by
//! an authenticated session; `/login` is public.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::api::auth::AUTH_COOKIE;
use crate::app_context::AppContext;
use crate::models::session::SessionState;

pub(crate) async fn dashboard(ctx: web::Data<AppContext>, req: HttpRequest) -> HttpResponse {
    let cookie = req.cookie(AUTH_COOKIE);
    let session = SessionState::rehydrate(
        &ctx.config.auth.token_secret,
        cookie.as_ref().map(|c| c.value()),
    );
    let identity = session.email.as_deref().unwrap_or("unknown").to_string();

    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Classboard</title></head>\n<body>\n\
         <h1>Classboard</h1>\n<p>Signed in as {identity}</p>\n\
         <nav><ul>\n\
         <li><a href=\"/api/teachers\">Teachers</a></li>\n\
         <li><a href=\"/api/classes\">Classes</a></li>\n\
         <li><a href=\"/api/subjects\">Subjects</a></li>\n\
         <li><a href=\"/api/assignments\">Assignments</a></li>\n\
         <li><a href=\"/api/attendance\">Attendance</a></li>\n\
         <li><a href=\"/api/schedule\">Schedule</a></li>\n\
         <li><a href=\"/api/performance\">Performance</a></li>\n\
         </ul></nav>\n</body>\n</html>\n"
    ))
}

pub(crate) async fn login_page() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(
        "<!DOCTYPE html>\n<html>\n<head><title>Classboard - Login</title></head>\n<body>\n\
         <h1>Sign in</h1>\n\
         <form method=\"post\" action=\"/api/auth/login\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n</body>\n</html>\n",
    )
}
