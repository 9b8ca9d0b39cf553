//! HTTP relay that turns email-editing requests into Gemini prompts.
//!
//! Routes: `POST /complete_email`, `POST /refine_email`, `POST /summarize_email`
//! and `GET /health`. See [`server::app_config`] for the route table.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;

pub use config::ServerConfig;
pub use server::{app_config, run, AppState};
