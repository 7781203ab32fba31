use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::config::ConfigError;
use crate::views;

/// A submitted class record that cannot be stored. The message is shown to the teacher as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Day, month, class number, unit number and class type are required.")]
    MissingField,

    #[error("You must select at least one content.")]
    NoContentSelected,

    #[error("Day, month, class number and unit number must be numbers.")]
    NonNumericField,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::Storage(e) | AppError::Schema(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::Config(e) => {
                error!("configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Io(e) => {
                error!("io error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Html(views::render_error(status, &message))).into_response()
    }
}
