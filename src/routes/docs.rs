use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};

use crate::{
    message::{ChatRequest, ChatResponse, HealthResponse},
    state::SharedState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Echobot API",
        version = "1.0.0",
        description = "A simple echo chatbot API that returns user messages with a prefix"
    ),
    paths(crate::routes::chat::health_handler, crate::routes::chat::chat_handler),
    components(schemas(ChatRequest, ChatResponse, HealthResponse))
)]
pub struct ApiDoc;

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Interactive viewers: Scalar at `/docs`, ReDoc at `/redoc`.
pub fn viewer_routes() -> Router<SharedState> {
    Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
