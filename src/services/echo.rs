// src/services/echo.rs
use std::fmt::Write;

use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
};

pub const REPLY_PREFIX: &str = "You said: ";
pub const HEALTH_STATUS: &str = "healthy";
pub const HEALTH_MESSAGE: &str = "Echobot API is running";

/// Stateless request handler behind both endpoints.
///
/// Built once at startup and shared through [`AppState`](crate::state::AppState);
/// holds nothing, so concurrent calls never coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoService;

impl EchoService {
    pub fn new() -> Self {
        Self
    }

    pub fn check_health(&self) -> HealthResponse {
        HealthResponse {
            status: HEALTH_STATUS.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }

    /// Echo a request that already passed validation.
    pub fn echo(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        info!("Received message: {}", request.message);

        let mut reply = String::with_capacity(REPLY_PREFIX.len() + request.message.len());
        write!(reply, "{REPLY_PREFIX}{}", request.message)
            .map_err(|err| AppError::Processing(err.to_string()))?;

        info!("Sending response: {reply}");
        Ok(ChatResponse { reply })
    }
}
