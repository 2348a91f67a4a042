//! # Application Logging
//!
//! Structured logging to the console and to a rotating application log
//! file. Both sinks receive events at `INFO` and above; the file rolls over
//! to a numbered backup once it grows past the configured size.

mod writer;

pub use writer::RotatingFileWriter;

use std::io;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Initialize the global tracing subscriber.
///
/// Installs two fmt layers: an ANSI console layer and a plain layer writing
/// through the rotating file writer. The writer is wrapped in a `Mutex`, so
/// concurrent handlers never interleave within a line.
///
/// Uses `try_init` so a second call (as happens under the test harness) is
/// a no-op rather than a panic.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(config: &LogConfig) -> io::Result<()> {
    let file_writer = RotatingFileWriter::open(&config.path, config.rotate_bytes)?;

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file_writer)),
        )
        .try_init();

    Ok(())
}
