use std::collections::BTreeMap;

use axum::http::{HeaderMap, Method, Uri};
use serde::Serialize;

/// Read-only view of the incoming request handed to the template renderer.
///
/// Templates receive this under the `request` key, mirroring what the
/// renderer needs for URL generation. Header values that are not valid
/// UTF-8 are replaced lossily.
#[derive(Debug, Serialize)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
}

impl RequestContext {
    /// Builds the view from the request parts the framework extracted.
    pub fn from_parts(method: &Method, uri: &Uri, headers: &HeaderMap) -> Self {
        let headers = headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        Self {
            method: method.to_string(),
            path: uri.path().to_string(),
            headers,
        }
    }
}
