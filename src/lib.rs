//! # Assistant Console
//!
//! Web console for managing virtual assistants: each assistant ties a name
//! and a prompt to a language model, a set of knowledge bases and a set of
//! MCP servers.
//!
//! This crate is the host. It serves the Leptos UI (`ui/` workspace member)
//! and exposes the UI's REST surface under `/api`, forwarding every call to
//! the assistant backend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use assistant_console::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("backend: {}", settings.backend.base_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: record types and the `AssistantBackend` port
//! - **Adapters**: HTTP backend client, API/health/UI handlers
//! - **Config**: configuration loading and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::domain::AssistantBackend;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `backend` - Assistant backend the `/api` routes forward to
/// * `health_handler` - Health check handler
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(backend: Arc<dyn AssistantBackend>, health_handler: Arc<HealthHandler>) -> Router {
    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_router = api_handler::api_router(ApiState { backend });

    let router = health_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(crate::adapters::ui_handler::UIHandler::serve);

    router.layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
