//! Rotating log file writer
//!
//! Provides an append-mode log file that rolls over to a numbered backup
//! once it grows past a fixed size threshold.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-mode log file that rotates at a byte threshold.
///
/// Before each write the pending buffer is counted against the threshold;
/// when it would push the file past the limit, the current file is renamed
/// to the first unused numbered backup (`app.log.1`, `app.log.2`, ...) and
/// a fresh file is opened at the original path. A single write larger than
/// the whole threshold is written as-is rather than rotating an empty file.
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    file: File,
    written: u64,
}

impl RotatingFileWriter {
    /// Open (or create) the log file for appending.
    ///
    /// Bytes already in the file count toward the threshold, so a restarted
    /// process keeps rotating at the same size.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        let file = open_log_file(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            file,
            written,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::rename(&self.path, backup_path(&self.path))?;
        self.file = open_log_file(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }

        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// First unused numbered backup path: `app.log` becomes `app.log.1`,
/// `app.log.2`, and so on.
fn backup_path(path: &Path) -> PathBuf {
    let mut index: u32 = 1;
    loop {
        let candidate = PathBuf::from(format!("{}.{index}", path.display()));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}
