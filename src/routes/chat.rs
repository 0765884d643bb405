use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    extract::ValidatedJson,
    message::{ChatRequest, ChatResponse, HealthResponse},
    state::SharedState,
};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/",
    summary = "Health check",
    description = "Check if the API is running",
    responses(
        (status = 200, description = "Health status of the API", body = HealthResponse)
    )
)]
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(state.echo.check_health())
}

/// Echo back the user's message with a prefix.
#[utoipa::path(
    post,
    path = "/chat",
    summary = "Echo a message",
    description = "Takes a message and returns it with a 'You said:' prefix",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "The echoed message with prefix", body = ChatResponse),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Failed to process message")
    )
)]
pub async fn chat_handler(
    State(state): State<SharedState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let response = state.echo.echo(request)?;
    Ok(Json(response))
}
