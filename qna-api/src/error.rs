use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use shared_types::{ErrorResponse, FieldError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Request validation failed")]
    Validation(Vec<FieldError>),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Config(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let error_response = match self {
            AppError::Validation(fields) => ErrorResponse {
                error: self.error_type(),
                message: self.to_string(),
                fields: fields.clone(),
            },
            AppError::NotFound(_) => ErrorResponse {
                error: self.error_type(),
                message: self.to_string(),
                fields: Vec::new(),
            },
            // Store and startup failures are logged in full but never echoed to clients
            AppError::Database(_) | AppError::Config(_) | AppError::Io(_) => {
                tracing::error!("Request failed: {}", self);
                ErrorResponse {
                    error: self.error_type(),
                    message: "Internal server error".to_string(),
                    fields: Vec::new(),
                }
            }
        };

        HttpResponse::build(status).json(error_response)
    }
}

impl AppError {
    fn error_type(&self) -> String {
        match self {
            AppError::Database(_) => "database_error".to_string(),
            AppError::Config(_) => "config_error".to_string(),
            AppError::Io(_) => "io_error".to_string(),
            AppError::NotFound(_) => "not_found".to_string(),
            AppError::Validation(_) => "validation_error".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Turns malformed or incomplete JSON bodies into 422 responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        JsonPayloadError::Deserialize(e) => {
            AppError::Validation(vec![FieldError::new("body", e.to_string())]).into()
        }
        JsonPayloadError::ContentType => AppError::Validation(vec![FieldError::new(
            "body",
            "expected Content-Type: application/json",
        )])
        .into(),
        other => other.into(),
    }
}

/// Turns unparsable path segments (e.g. `/questions/abc`) into 422 responses.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(vec![FieldError::new("path", err.to_string())]).into()
}
