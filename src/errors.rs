use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Possible errors that can occur in the service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Password does not meet complexity requirements")]
    WeakPassword,
    #[error("Employee not found")]
    NotFound,
    #[error("Employee id does not match request path")]
    IdMismatch,
}

impl actix_web::error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::IdMismatch | ServiceError::WeakPassword => StatusCode::BAD_REQUEST,
            ServiceError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.status_code().to_string(),
            message: self.to_string(),
        })
    }
}

/// Error response for API endpoints
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
    message: String,
}
