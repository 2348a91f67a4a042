//! # Clock Page Handler
//!
//! Serves the main page with the clock display. The page itself keeps time
//! client-side; this handler only renders the template.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::Html,
};
use tera::Context;
use tracing::{info, instrument};

use crate::error::AppResult;
use crate::models::{AppState, RequestContext};

/// Template rendered for the clock page.
const INDEX_TEMPLATE: &str = "index.html";

/// Serves the clock display page.
///
/// GET /
///
/// Renders the `index.html` template with the incoming request bound under
/// the `request` key, which templates may use for URL generation.
///
/// # Returns
///
/// - `200 OK` with the rendered HTML
/// - `500 Internal Server Error` - Template missing or failed to render
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn index_page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> AppResult<Html<String>> {
    info!("Index page requested");

    let mut context = Context::new();
    context.insert("request", &RequestContext::from_parts(&method, &uri, &headers));

    let html = state.templates.render(INDEX_TEMPLATE, &context)?;
    Ok(Html(html))
}
