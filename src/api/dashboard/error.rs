use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt::Display;

#[derive(Debug)]
pub(crate) enum DashboardError {
    TeacherNotFound(String),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::TeacherNotFound(id) => {
                write!(f, "Teacher with id '{}' not found", id)
            }
        }
    }
}

impl ResponseError for DashboardError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::TeacherNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
