//! PDF metadata extraction

use std::path::Path;
use lopdf::{Dictionary, Document};
use crate::error::{Error, Result};

/// Walk trailer -> catalog -> page tree root.
/// Reading the Count field there is more reliable than get_pages() for
/// documents with nested page trees.
fn page_tree_root(doc: &Document) -> Result<&Dictionary> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_object(catalog_id)?.as_dict()?;
    let pages_id = catalog.get(b"Pages")?.as_reference()?;
    let root = doc.get_object(pages_id)?.as_dict()?;
    Ok(root)
}

/// Count the number of pages in a PDF file.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let count = page_tree_root(&doc)?.get(b"Count")?.as_i64()?;

    Ok(count as usize)
}

/// Read the effective `/Rotate` value of every page, in page order.
///
/// Pages without an explicit `/Rotate` entry report the PDF default of 0.
pub fn page_rotations(path: &Path) -> Result<Vec<i64>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;

    let mut rotations = Vec::new();
    for page_id in doc.get_pages().into_values() {
        let page_dict = doc.get_dictionary(page_id)?;
        let angle = match page_dict.get(b"Rotate") {
            Ok(object) => object.as_i64()?,
            Err(_) => 0,
        };
        rotations.push(angle);
    }

    Ok(rotations)
}
