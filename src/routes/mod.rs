// src/routes/mod.rs
pub mod chat;
pub mod docs;

use crate::{error::panic_response, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use docs::{openapi_handler, viewer_routes};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/openapi.json", get(openapi_handler))
        .merge(viewer_routes())
}

/// Panic recovery, request tracing and CORS, in that order from the inside out.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

// Mirrors the caller's origin with credentials allowed; narrow it in a hardened deployment.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn app(state: SharedState) -> Router {
    with_middleware(create_router()).with_state(state)
}
