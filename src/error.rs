//! Error types for the batch PDF utilities

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Engine-level error raised while loading, rotating, saving or merging
/// documents. These never cross the `BatchDocumentProcessor` boundary raw;
/// the processor converts them into logged failures or a [`MergeError`].
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Rotation angle is not a multiple of 90 degrees
    #[error("Unsupported rotation angle: {0}")]
    UnsupportedRotation(i64),

    /// General error
    #[error("{0}")]
    General(String),
}

/// Request-shape violation detected before any engine call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// An input or output list was empty
    #[error("Operation failed. Please, provide non-empty arrays of full file names.")]
    EmptyInput,

    /// Rotation input and output lists differ in length
    #[error("Operation failed. Array of input and output files must be equal size.")]
    SizeMismatch,
}

/// Validation failure returned by a rejected rotate batch.
///
/// `Display` renders the pointer to the diagnostic log; the specific
/// violations are carried in `errors`.
#[derive(Error, Debug)]
#[error("Following errors occurred during operation execution. Please, check log file {}", .log_file.display())]
pub struct BatchRejection {
    /// Path of the diagnostic log the rejection was recorded to
    pub log_file: PathBuf,
    /// The specific request-shape violations
    pub errors: Vec<ValidationError>,
}

impl BatchRejection {
    /// Render the rejection as a flat message list: the log pointer first,
    /// followed by one message per violation.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        messages.extend(self.errors.iter().map(ToString::to_string));
        messages
    }
}

/// Failure returned by a merge call.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Request rejected before any engine call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The engine failed while loading a source or writing the destination;
    /// the whole merge is aborted
    #[error("{0}")]
    Engine(String),
}
