//! # Clockface - Clock Display Server
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the page and health endpoints
//! - [`models`] - Shared application state and the request view passed to templates
//! - [`config`] - Server configuration assembled once at process start
//! - [`logging`] - Console and rotating-file log setup
//! - [`error`] - Central error type and HTTP response mapping

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;

use std::sync::Arc;

use axum::{Router, routing::get};
use tera::Tera;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::handlers::{health_check, index_page};
use crate::models::AppState;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `config` - Server configuration holding the template and static asset
///   directories
///
/// # Routes
///
/// - `GET /` - Clock display page rendered from `index.html`
/// - `GET /health` - Liveness probe
/// - `GET /static/*` - Static assets served from the configured directory
///
/// Requests outside this table get the framework defaults: 404 for an
/// unmatched path, 405 for a matched path with the wrong method.
///
/// # Panics
///
/// Panics if a template file in the configured directory fails to parse.
/// An absent or empty template directory is tolerated; the page route then
/// fails at render time instead.
pub fn app(config: &ServerConfig) -> Router {
    let template_glob = format!("{}/**/*.html", config.template_dir.display());
    let templates =
        Tera::new(&template_glob).expect("Failed to parse templates in the template directory");

    let state = Arc::new(AppState::new(templates));

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
}
