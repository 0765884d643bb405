// src/message.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldViolation, Validate, check_length};

pub const MIN_MESSAGE_CHARS: usize = 1;
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Request model for chat messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "message": "Hello, how are you?" }))]
pub struct ChatRequest {
    /// The message to be echoed
    #[schema(min_length = 1, max_length = 1000)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Validate for ChatRequest {
    const STRING_FIELDS: &'static [&'static str] = &["message"];

    fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        match check_length("message", &self.message, MIN_MESSAGE_CHARS, MAX_MESSAGE_CHARS) {
            Some(violation) => Err(vec![violation]),
            None => Ok(()),
        }
    }
}

/// Response model for chat messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "reply": "You said: Hello, how are you?" }))]
pub struct ChatResponse {
    /// The echoed message with prefix
    pub reply: String,
}

/// Response model for the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service message
    pub message: String,
}
