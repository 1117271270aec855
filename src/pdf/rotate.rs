//! Page rotation using lopdf

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Rotation applied by the batch landscape operation, in degrees
pub const LANDSCAPE_DEGREES: i64 = 90;

/// Rotate every page of a PDF and write the result to a new file.
///
/// The angle is written absolutely into each page's `/Rotate` entry, so
/// rotating an already-rotated document by the same angle leaves it at that
/// angle rather than accumulating. `degrees` must be a multiple of 90, as
/// required by the PDF page dictionary.
///
/// # Example
///
/// ```no_run
/// use pdf_batch_utils::pdf::{rotate_document, LANDSCAPE_DEGREES};
/// use std::path::Path;
///
/// rotate_document(
///     Path::new("portrait.pdf"),
///     Path::new("landscape.pdf"),
///     LANDSCAPE_DEGREES,
/// ).expect("Failed to rotate");
/// ```
pub fn rotate_document(input_path: &Path, output_path: &Path, degrees: i64) -> Result<()> {
    if degrees % 90 != 0 {
        return Err(Error::UnsupportedRotation(degrees));
    }

    if !input_path.exists() {
        return Err(Error::FileNotFound(input_path.to_path_buf()));
    }

    let mut doc = Document::load(input_path)?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(Error::EmptyPdf(input_path.to_path_buf()));
    }

    for page_id in pages.into_values() {
        let page_object = doc.get_object_mut(page_id)?;
        if let Object::Dictionary(ref mut page_dict) = page_object {
            page_dict.set("Rotate", Object::Integer(degrees));
        }
    }

    doc.save(output_path)?;

    Ok(())
}
