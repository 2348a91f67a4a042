use tera::Tera;
use tracing::{debug, info};

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Templates parsed from the template directory at startup.
    pub templates: Tera,
}

impl AppState {
    /// Creates a new application state around the parsed template set.
    pub fn new(templates: Tera) -> Self {
        info!("Initializing application state");
        debug!(
            template_count = templates.get_template_names().count(),
            "Templates loaded"
        );

        Self { templates }
    }
}
