//! Domain error types for the OHS compliance server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record with the same business number already exists
    #[error("A record with number '{0}' already exists")]
    DuplicateNumber(String),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::DuplicateNumber(_) => "DUPLICATE_NUMBER",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::DuplicateNumber(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        })
    }
}

/// Error response body.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
    /// Machine readable error code
    pub code: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.error)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        classify_sql_err(err.sql_err(), None).unwrap_or_else(|| AppError::Database(err.to_string()))
    }
}

impl AppError {
    /// Convert a failed insert or update of a record identified by `number`.
    ///
    /// A violation of the `number` unique index (a concurrent write that
    /// slipped past the pre-check) reports the number itself.
    pub fn from_numbered_write(err: sea_orm::DbErr, number: &str) -> Self {
        classify_sql_err(err.sql_err(), Some(number))
            .unwrap_or_else(|| AppError::Database(err.to_string()))
    }
}

fn classify_sql_err(sql_err: Option<sea_orm::SqlErr>, number: Option<&str>) -> Option<AppError> {
    match sql_err? {
        sea_orm::SqlErr::UniqueConstraintViolation(detail) => Some(match number {
            Some(number) if is_number_key(&detail) => AppError::DuplicateNumber(number.to_string()),
            _ => AppError::Database(format!("Unique constraint violated: {}", detail)),
        }),
        sea_orm::SqlErr::ForeignKeyConstraintViolation(detail) => Some(AppError::InvalidInput(
            format!("Referenced record does not exist: {}", detail),
        )),
        _ => None,
    }
}

/// SQLite names the column (`table.number`), PostgreSQL the constraint (`table_number_key`).
fn is_number_key(detail: &str) -> bool {
    detail.contains(".number") || detail.contains("_number_key")
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("Invalid UUID: {}", err))
    }
}
