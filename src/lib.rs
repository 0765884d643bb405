//! # echobot_api
//!
//! A simple echo chatbot API that returns user messages with a prefix.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
