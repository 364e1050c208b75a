use actix_web::{web, HttpResponse, Result};

use super::dtos::Teacher;
use super::error::DashboardError;
use super::repo;

/// List all teachers
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = "dashboard",
    responses(
        (status = 200, description = "All teachers", body = [Teacher])
    )
)]
pub(crate) async fn list_teachers() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::teachers()))
}

/// Fetch a single teacher by id
#[utoipa::path(
    get,
    path = "/api/teachers/{teacher_id}",
    tag = "dashboard",
    params(
        ("teacher_id" = String, Path, description = "ID of the teacher")
    ),
    responses(
        (status = 200, description = "The teacher", body = Teacher),
        (status = 404, description = "Teacher not found")
    )
)]
pub(crate) async fn get_teacher(
    teacher_id: web::Path<String>,
) -> Result<HttpResponse, DashboardError> {
    let teacher = repo::find_teacher(&teacher_id)
        .ok_or_else(|| DashboardError::TeacherNotFound(teacher_id.to_string()))?;
    Ok(HttpResponse::Ok().json(teacher))
}

pub(crate) async fn list_classes() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::classes()))
}

pub(crate) async fn list_subjects() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::subjects()))
}

pub(crate) async fn list_assignments() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::assignments()))
}

pub(crate) async fn list_attendance() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::attendance()))
}

pub(crate) async fn list_schedule() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::schedule()))
}

pub(crate) async fn performance_overview() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(repo::performance()))
}
