// src/services/mod.rs
pub mod echo;
