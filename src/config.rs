//! # Server Configuration
//!
//! Fixed paths and limits for the server, assembled once in `main` and
//! injected into the router and the logging setup. There are no environment
//! variables and no CLI flags; the defaults below are the configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Size at which the application log rolls over to a numbered backup.
///
/// 10 MB in decimal units.
pub const LOG_ROTATE_BYTES: u64 = 10 * 1000 * 1000;

/// Configuration for the rotating application log file.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path of the append-mode log file.
    pub path: PathBuf,
    /// Byte threshold past which the file is rotated.
    pub rotate_bytes: u64,
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_addr: SocketAddr,
    /// Directory mounted at the `/static` URL prefix.
    pub static_dir: PathBuf,
    /// Directory the template engine loads `index.html` from.
    pub template_dir: PathBuf,
    /// Application log settings.
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from("static"),
            template_dir: PathBuf::from("templates"),
            log: LogConfig {
                path: PathBuf::from("app.log"),
                rotate_bytes: LOG_ROTATE_BYTES,
            },
        }
    }
}
