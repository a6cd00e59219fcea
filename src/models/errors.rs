use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::ValidationError(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::AuthenticationError(msg) => HttpResponse::Unauthorized().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Database error occurred"
                }))
            }
            ServiceError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::DatabaseError(err.to_string())
    }
}
