//! PDF Batch Utilities
//!
//! A library for batch PDF page manipulation built on lopdf.
//! This library provides functionality to:
//! - Rotate every page of a set of PDF files to landscape
//! - Merge multiple PDF files into one document
//! - Extract metadata (page counts, page rotations)
//!
//! Batch rotation processes each document independently and keeps going when
//! one fails; merging is all-or-nothing. Every processor instance owns a
//! diagnostic log file in the system temp directory where caught failures
//! are recorded.
//!
//! # Example
//!
//! ```no_run
//! use pdf_batch_utils::BatchDocumentProcessor;
//! use std::path::{Path, PathBuf};
//!
//! let mut processor = BatchDocumentProcessor::new().expect("Failed to create log file");
//!
//! let rotated = processor
//!     .rotate(
//!         &[PathBuf::from("1. intro.pdf"), PathBuf::from("2. advanced.pdf")],
//!         &[PathBuf::from("1. intro-landscape.pdf"), PathBuf::from("2. advanced-landscape.pdf")],
//!     )
//!     .expect("Invalid rotate request");
//!
//! let merged = processor
//!     .merge(&rotated, Path::new("course.pdf"))
//!     .expect("Failed to merge PDFs");
//! ```

pub mod error;
pub mod log;
pub mod pdf;
pub mod processor;

// Re-export commonly used items
pub use error::{BatchRejection, Error, MergeError, Result, ValidationError};
pub use processor::{BatchDocumentProcessor, EngineFailure};
