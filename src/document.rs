//! Document intake and form-structure cloning.
//!
//! Loading is the one fatal path in the whole pipeline: an unreadable or
//! malformed source PDF aborts before any write. Cloning copies every page
//! and the complete field hierarchy into a fresh output document (the
//! document library's structural clone keeps object ids stable, so a
//! catalog built from the source targets the clone directly) and then sets
//! `/NeedAppearances` so viewers regenerate glyphs from the logical values
//! this crate writes, instead of trusting stale appearance streams.

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Load a PDF document from disk.
///
/// Fails with [`Error::DocumentRead`] when the path is unreadable or the
/// content is not a valid PDF.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    log::info!("Loading PDF document from {}", path.display());
    Document::load(path).map_err(Error::DocumentRead)
}

/// Clone the source document into an output document ready for filling.
///
/// A source without an AcroForm produces an output without one; subsequent
/// field writes then become no-ops rather than errors.
pub fn clone_with_form(source: &Document) -> Document {
    let mut out = source.clone();
    if set_need_appearances(&mut out) {
        log::debug!("Set /NeedAppearances on the output AcroForm");
    } else {
        log::warn!("Source document has no AcroForm; field writes will be skipped");
    }
    out
}

/// Set `/NeedAppearances true` on the document's AcroForm dictionary.
/// Returns false when the document has no AcroForm to flag.
fn set_need_appearances(doc: &mut Document) -> bool {
    let Some(root_id) = doc
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|o| o.as_reference().ok())
    else {
        return false;
    };
    let acro = match doc.get_dictionary(root_id) {
        Ok(root) => root.get(b"AcroForm").ok().cloned(),
        Err(_) => None,
    };
    match acro {
        Some(Object::Reference(acro_id)) => {
            if let Ok(dict) = doc
                .get_object_mut(acro_id)
                .and_then(|o| o.as_dict_mut())
            {
                dict.set("NeedAppearances", Object::Boolean(true));
                return true;
            }
            false
        },
        Some(Object::Dictionary(mut dict)) => {
            // Inline AcroForm: update the copy and write it back through
            // the catalog dictionary.
            dict.set("NeedAppearances", Object::Boolean(true));
            if let Ok(root) = doc
                .get_object_mut(root_id)
                .and_then(|o| o.as_dict_mut())
            {
                root.set("AcroForm", Object::Dictionary(dict));
                return true;
            }
            false
        },
        _ => false,
    }
}

/// Serialize a filled document to disk.
pub fn save_document(doc: &mut Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing filled PDF to {}", path.display());
    doc.save(path)?;
    Ok(())
}
