use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::repositories::StoreError;
use crate::services::{GateError, HotelServiceError};
use crate::utils::response::{empty, error as error_response};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::PaymentRequired(_) => "PAYMENT_REQUIRED",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::PaymentRequired(msg) => {
                debug!(code = self.code(), message = %msg, "Request rejected");
            }
            AppError::DatabaseError(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotFound => AppError::NotFound(err.to_string()),
            GateError::PaymentRequired => AppError::PaymentRequired(err.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
            StoreError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

impl From<HotelServiceError> for AppError {
    // Every hotel lookup failure, including storage errors, reaches the client as 404.
    fn from(err: HotelServiceError) -> Self {
        if let HotelServiceError::Store(StoreError::Database(e)) = &err {
            warn!(error = ?e, "Hotel lookup failed");
        }
        AppError::NotFound(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        match self {
            // Gate outcomes carry no body so clients cannot tell the causes apart.
            AppError::Unauthorized(_) | AppError::NotFound(_) | AppError::PaymentRequired(_) => {
                empty(status)
            }
            AppError::DatabaseError(_) => {
                error_response(code, "A database error occurred", None, status)
            }
        }
    }
}
