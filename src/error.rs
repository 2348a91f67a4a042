//! # Centralized Error Handling
//!
//! This module provides the unified error type for the application and its
//! conversion to HTTP responses. The only failure path a handler has is
//! template rendering; everything else (missing assets, unmatched routes)
//! is answered by the framework or the static file service directly.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Central application error type.
///
/// Render errors are logged automatically when converted into a response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("template rendering failed")]
    Render(#[from] tera::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Render(e) = &self;
        error!(?e, "Template rendering failed");

        let (status, message) = match self {
            AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
