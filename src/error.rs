// src/error.rs
//! Application error types.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::validation::FieldViolation;

pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";
pub const PROCESSING_ERROR_DETAIL: &str = "Failed to process message";

pub type AppResult<T> = Result<T, AppError>;

/// Every failed request ends in exactly one of these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("request validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("error processing message: {0}")]
    Processing(String),

    #[error("unhandled error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Processing(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(violations) => json!({ "detail": violations }),
            AppError::Processing(ref detail) => {
                error!(%detail, "Error processing message");
                json!({ "detail": PROCESSING_ERROR_DETAIL })
            }
            AppError::Internal(ref detail) => {
                error!(%detail, "Unhandled exception");
                json!({ "detail": INTERNAL_ERROR_DETAIL })
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked, installed through `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
