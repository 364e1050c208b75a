use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt::Display;

#[derive(Debug)]
pub(crate) enum AuthError {
    InvalidEncryptedFormat,
    DecryptionFailed,
    InvalidEmail,
    InvalidPassword,
    ServerError(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidEncryptedFormat => write!(f, "Invalid encrypted data format"),
            AuthError::DecryptionFailed => write!(f, "Decryption failed"),
            AuthError::InvalidEmail => write!(f, "Invalid email"),
            AuthError::InvalidPassword => write!(f, "Invalid password"),
            AuthError::ServerError(e) => write!(f, "Internal server error: {e}"),
        }
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AuthError::ServerError(e) => {
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "message": "Internal server error",
                    "error": e,
                }))
            }
            _ => HttpResponse::build(self.status_code()).json(serde_json::json!({
                "message": self.to_string(),
            })),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidEncryptedFormat => StatusCode::BAD_REQUEST,
            AuthError::DecryptionFailed => StatusCode::BAD_REQUEST,
            AuthError::InvalidEmail => StatusCode::UNAUTHORIZED,
            AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AuthError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
