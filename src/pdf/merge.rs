//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use lopdf::{Dictionary, Document, Object, ObjectId};
use crate::error::{Error, Result};

/// Merge multiple PDF files into a single PDF, pages in input order.
///
/// The merge is a single transaction: any failure while loading a source or
/// writing the destination aborts the whole operation.
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// # Example
///
/// ```no_run
/// use pdf_batch_utils::pdf::merge_documents;
/// use std::path::{Path, PathBuf};
///
/// merge_documents(
///     &[PathBuf::from("first.pdf"), PathBuf::from("second.pdf")],
///     Path::new("merged.pdf"),
/// ).expect("Failed to merge");
/// ```
pub fn merge_documents(input_paths: &[PathBuf], output_path: &Path) -> Result<()> {
    if input_paths.is_empty() {
        return Err(Error::General("No input documents provided".to_string()));
    }

    for path in input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    // Load all sources before touching the output
    let mut sources: Vec<Document> = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        let doc = Document::load(path)?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        sources.push(doc);
    }

    // Renumber each source into a disjoint object-id range and pool the
    // objects, keeping page ids in input order
    let mut next_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut pooled: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut source in sources {
        source.renumber_objects_with(next_id);
        next_id = source.max_id + 1;

        page_ids.extend(source.get_pages().into_values());
        pooled.extend(source.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(pooled);

    // max_id must cover the pooled objects before new ids are handed out,
    // otherwise new_object_id() would collide with them
    merged.max_id = next_id - 1;

    // Fresh page tree root listing every collected page
    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));
    merged.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = merged.add_object(catalog);

    merged.trailer.set("Root", Object::Reference(catalog_id));

    // Repoint every page at the new tree root
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(ref mut page_dict)) = merged.get_object_mut(page_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged.compress();
    merged.save(output_path)?;

    Ok(())
}
