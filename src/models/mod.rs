mod request;
mod state;

pub use request::RequestContext;
pub use state::AppState;
