//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};

/// Fixed payload returned by the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check endpoint that reports the application is alive.
///
/// GET /health
///
/// This endpoint performs no I/O and no computation beyond constructing a
/// literal value, so it has no failure path.
///
/// # Returns
///
/// Always returns `200 OK` with body `{"status":"healthy"}`.
#[instrument]
pub async fn health_check() -> Json<HealthStatus> {
    debug!("Health check endpoint accessed");
    Json(HealthStatus { status: "healthy" })
}
