use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            // Already logged with its operation by the service layer
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Timeout(ref msg) => {
                tracing::error!("Timeout: {}", msg);
                msg.clone()
            }
            AppError::NotFound(ref msg)
            | AppError::Validation(ref msg)
            | AppError::PayloadTooLarge(ref msg) => {
                tracing::warn!("{} {}", status.as_u16(), msg);
                msg.clone()
            }
        };

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
