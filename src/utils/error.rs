use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::api::envelope::Envelope;
use crate::database::StoreError;

#[derive(Debug)]
pub enum AppError {
    /// A required body field was missing or falsy.
    Validation(String),
    NotFound(String),
    UnknownField { collection: &'static str, field: String },
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::UnknownField { collection, field } => {
                write!(f, "Field '{}' cannot be used on {}", field, collection)
            }
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

// Validation failures answer 404, not 400: existing clients depend on it.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::UnknownField { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::DatabaseError(cause) => {
                log::error!("❌ {}", cause);
                HttpResponse::InternalServerError().json(Envelope::message("Internal Server Error"))
            }
            other => {
                log::info!("⚠️ {}", other);
                HttpResponse::NotFound().json(Envelope::message(other.to_string()))
            }
        }
    }
}
