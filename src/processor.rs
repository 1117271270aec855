//! Batch document processor
//!
//! Validates request shapes, drives the per-document engine calls, and
//! accumulates results. The two operations deliberately fail differently:
//! rotation treats each document as an independent unit and keeps going past
//! failures, while a merge is one engine transaction and any failure aborts
//! the whole call.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BatchRejection, Error, MergeError, ValidationError};
use crate::log::DiagnosticLog;
use crate::pdf::{merge_documents, rotate_document, LANDSCAPE_DEGREES};

/// One document that failed during a batch rotation.
#[derive(Debug, Clone)]
pub struct EngineFailure {
    /// The input document the engine choked on
    pub input_path: PathBuf,
    /// Human-readable failure detail, as written to the diagnostic log
    pub detail: String,
}

/// Processor for one batch of rotate or merge operations.
///
/// Each instance owns its diagnostic log file; accumulated results and
/// failures are cleared at the start of every public operation call.
#[derive(Debug)]
pub struct BatchDocumentProcessor {
    log: DiagnosticLog,
    rotated: Vec<PathBuf>,
    failures: Vec<EngineFailure>,
}

impl BatchDocumentProcessor {
    /// Create a processor together with its diagnostic log file.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            log: DiagnosticLog::create()?,
            rotated: Vec::new(),
            failures: Vec::new(),
        })
    }

    /// Path of this processor's diagnostic log file
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Output paths produced by the most recent rotate call, in input order
    pub fn rotated(&self) -> &[PathBuf] {
        &self.rotated
    }

    /// Per-document failures recorded by the most recent rotate call
    pub fn failures(&self) -> &[EngineFailure] {
        &self.failures
    }

    /// Rotate every page of every input document to landscape (90 degrees)
    /// and write each result to the output path at the same index.
    ///
    /// Documents are processed independently: an engine failure on one is
    /// logged and recorded in [`failures`](Self::failures), and processing
    /// continues with the rest. The returned list holds the output paths that
    /// were actually produced, in input order.
    ///
    /// A request-shape violation rejects the whole batch before any engine
    /// call; the returned [`BatchRejection`] points at the diagnostic log.
    pub fn rotate(
        &mut self,
        input_paths: &[PathBuf],
        output_paths: &[PathBuf],
    ) -> Result<Vec<PathBuf>, BatchRejection> {
        self.rotated.clear();
        self.failures.clear();

        if let Err(violation) = check_batch_shape(input_paths, output_paths) {
            let _ = self.log.record("rotate", &violation.to_string());
            return Err(BatchRejection {
                log_file: self.log.path().to_path_buf(),
                errors: vec![violation],
            });
        }

        for (input_path, output_path) in input_paths.iter().zip(output_paths) {
            match rotate_document(input_path, output_path, LANDSCAPE_DEGREES) {
                Ok(()) => self.rotated.push(output_path.clone()),
                Err(error) => self.record_failure("rotate", input_path, &error),
            }
        }

        Ok(self.rotated.clone())
    }

    /// Merge the input documents, pages in input order, into a single
    /// document at `output_path` and return that path.
    ///
    /// Unlike rotation this is all-or-nothing: the first engine failure
    /// aborts the merge and is returned as [`MergeError::Engine`].
    pub fn merge(
        &mut self,
        input_paths: &[PathBuf],
        output_path: &Path,
    ) -> Result<PathBuf, MergeError> {
        self.rotated.clear();
        self.failures.clear();

        if input_paths.is_empty() || output_path.as_os_str().is_empty() {
            let _ = self
                .log
                .record("merge", &ValidationError::EmptyInput.to_string());
            return Err(MergeError::Validation(ValidationError::EmptyInput));
        }

        match merge_documents(input_paths, output_path) {
            Ok(()) => Ok(output_path.to_path_buf()),
            Err(error) => {
                let _ = self.log.record("merge", &error.to_string());
                Err(MergeError::Engine(error.to_string()))
            }
        }
    }

    // Log write failures must not abort the batch, so the record result is
    // dropped here.
    fn record_failure(&mut self, operation: &str, input_path: &Path, error: &Error) {
        let detail = format!("{}: {}", input_path.display(), error);
        let _ = self.log.record(operation, &detail);
        self.failures.push(EngineFailure {
            input_path: input_path.to_path_buf(),
            detail: error.to_string(),
        });
    }
}

fn check_batch_shape(
    input_paths: &[PathBuf],
    output_paths: &[PathBuf],
) -> Result<(), ValidationError> {
    if input_paths.is_empty() || output_paths.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if input_paths.len() != output_paths.len() {
        return Err(ValidationError::SizeMismatch);
    }
    Ok(())
}
