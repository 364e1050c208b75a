use utoipa::OpenApi;

/// API documentation for authentication endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::auth::controller::login,
        crate::api::auth::controller::logout
    ),
    components(
        schemas(
            crate::api::auth::dtos::LoginRequest,
            crate::api::auth::dtos::EncryptedLogin,
            crate::api::auth::dtos::PlainLogin,
            crate::api::auth::dtos::LoginResponse,
            crate::api::auth::dtos::MessageResponse,
            crate::models::token::Claims
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints")
    ),
    info(
        title = "Classboard API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Teacher management dashboard API"
    )
)]
pub struct AuthApiDoc;

/// API documentation for the dashboard data endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::dashboard::controller::list_teachers,
        crate::api::dashboard::controller::get_teacher
    ),
    components(
        schemas(
            crate::api::dashboard::dtos::Teacher,
            crate::api::dashboard::dtos::SchoolClass,
            crate::api::dashboard::dtos::Subject,
            crate::api::dashboard::dtos::Assignment,
            crate::api::dashboard::dtos::AttendanceSummary,
            crate::api::dashboard::dtos::ScheduleSlot,
            crate::api::dashboard::dtos::PerformancePoint
        )
    ),
    tags(
        (name = "dashboard", description = "Dashboard data endpoints")
    ),
    info(
        title = "Classboard API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Teacher management dashboard API"
    )
)]
pub struct DashboardApiDoc;

/// Combined documentation for the whole HTTP surface
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::auth::controller::login,
        crate::api::auth::controller::logout,
        crate::api::dashboard::controller::list_teachers,
        crate::api::dashboard::controller::get_teacher
    ),
    components(
        schemas(
            crate::api::auth::dtos::LoginRequest,
            crate::api::auth::dtos::EncryptedLogin,
            crate::api::auth::dtos::PlainLogin,
            crate::api::auth::dtos::LoginResponse,
            crate::api::auth::dtos::MessageResponse,
            crate::models::token::Claims,
            crate::api::dashboard::dtos::Teacher,
            crate::api::dashboard::dtos::SchoolClass,
            crate::api::dashboard::dtos::Subject,
            crate::api::dashboard::dtos::Assignment,
            crate::api::dashboard::dtos::AttendanceSummary,
            crate::api::dashboard::dtos::ScheduleSlot,
            crate::api::dashboard::dtos::PerformancePoint
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "dashboard", description = "Dashboard data endpoints")
    ),
    info(
        title = "Classboard API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Teacher management dashboard API"
    )
)]
pub struct CombinedApiDoc;
