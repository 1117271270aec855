//! Instance-owned diagnostic log
//!
//! Each `BatchDocumentProcessor` owns exactly one log file, created in the
//! system temp directory at construction time and kept on disk after the
//! processor is dropped so callers can follow the pointer embedded in error
//! responses.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Fixed prefix of every diagnostic log file name
const LOG_FILE_PREFIX: &str = "pdf-batch-utils-";

/// Append-only log of failures caught during batch operations.
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    file: File,
}

impl DiagnosticLog {
    /// Create a fresh log file named `pdf-batch-utils-<random>.log` in the
    /// system temp directory.
    pub fn create() -> io::Result<Self> {
        let (file, path) = tempfile::Builder::new()
            .prefix(LOG_FILE_PREFIX)
            .suffix(".log")
            .tempfile()?
            .keep()
            .map_err(|persist| persist.error)?;

        Ok(Self { path, file })
    }

    /// Location of the log file on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped entry: `<timestamp> [<operation>] <detail>`
    pub fn record(&mut self, operation: &str, detail: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "{} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            operation,
            detail
        )
    }
}
