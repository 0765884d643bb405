// src/state.rs
use std::sync::Arc;

use crate::services::echo::EchoService;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default)]
pub struct AppState {
    pub echo: EchoService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            echo: EchoService::new(),
        }
    }
}
