//! AcroForm field catalog extraction.
//!
//! Walks `/AcroForm /Fields` (ISO 32000-1:2008, Section 12.7) and produces a
//! flat mapping from fully-qualified field name to [`FieldNode`]. Kids that
//! carry their own `/T` are child fields and recurse with a dot-qualified
//! name; kids without `/T` are widget annotations of the field and never
//! appear as top-level entries.
//!
//! Extraction is tolerant by design: a document with no AcroForm yields an
//! empty catalog, and malformed entries are skipped with a warning. Only the
//! document-level read (see [`crate::document`]) is allowed to fail.

use indexmap::IndexMap;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Flat field-name → field mapping, in document traversal order.
pub type FieldCatalog = IndexMap<String, FieldNode>;

/// The widget kind of a form field, derived from `/FT` and `/Ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text field (`/FT /Tx`).
    Text,
    /// Two-state button (`/FT /Btn`, single widget, radio flag clear).
    Checkbox,
    /// Multi-state exclusive button group (`/FT /Btn` with the radio flag,
    /// or multiple widget kids).
    RadioGroup,
    /// Anything else (choice fields, signatures, missing `/FT`).
    Unknown,
}

/// One field reachable from the catalog.
#[derive(Debug, Clone)]
pub struct FieldNode {
    /// Fully-qualified field name.
    pub name: String,
    /// Object id of the field dictionary.
    pub id: ObjectId,
    /// Widget kind.
    pub kind: FieldKind,
    /// Object ids of widget kids (empty for merged single-widget fields).
    pub kids: Vec<ObjectId>,
}

/// Radio flag bit in `/Ff` (PDF Table 226, bit position 16).
const FF_RADIO: i64 = 1 << 15;

/// Extract the field catalog from a document.
///
/// Returns an empty catalog when the document has no AcroForm, a malformed
/// catalog dictionary, or an empty `/Fields` array.
pub fn read_catalog(doc: &Document) -> FieldCatalog {
    let mut catalog = FieldCatalog::new();
    let Some(fields) = form_fields_array(doc) else {
        log::debug!("Document has no AcroForm field array");
        return catalog;
    };
    for entry in fields {
        match entry.as_reference() {
            Ok(id) => collect_field(doc, id, None, &mut catalog),
            Err(_) => log::warn!("Skipping non-reference entry in /Fields"),
        }
    }
    log::debug!("Field catalog holds {} fields", catalog.len());
    catalog
}

/// Resolve the `/AcroForm /Fields` array, following references.
fn form_fields_array(doc: &Document) -> Option<&[Object]> {
    let root_id = doc.trailer.get(b"Root").ok()?.as_reference().ok()?;
    let root = doc.get_dictionary(root_id).ok()?;
    let acro = deref_dict(doc, root.get(b"AcroForm").ok()?)?;
    deref_array(doc, acro.get(b"Fields").ok()?)
}

fn collect_field(
    doc: &Document,
    id: ObjectId,
    parent_name: Option<&str>,
    catalog: &mut FieldCatalog,
) {
    let Ok(dict) = doc.get_dictionary(id) else {
        log::warn!("Skipping unresolvable field object {} {}", id.0, id.1);
        return;
    };

    let partial = dict.get(b"T").ok().and_then(string_value);
    let name = match (parent_name, partial) {
        (Some(parent), Some(t)) => format!("{}.{}", parent, t),
        (None, Some(t)) => t,
        (Some(parent), None) => {
            // A kid without /T is a widget, not a field; the caller keeps it.
            log::warn!("Field under '{}' has no /T; ignoring", parent);
            return;
        },
        (None, None) => {
            log::warn!("Top-level field {} {} has no /T; ignoring", id.0, id.1);
            return;
        },
    };

    // Partition /Kids into child fields (own /T, recurse) and widgets.
    let mut widget_kids = Vec::new();
    let mut child_fields = Vec::new();
    if let Some(kids) = dict.get(b"Kids").ok().and_then(|o| deref_array(doc, o)) {
        for kid in kids {
            let Ok(kid_id) = kid.as_reference() else { continue };
            match doc.get_dictionary(kid_id) {
                Ok(kid_dict) if kid_dict.has(b"T") => child_fields.push(kid_id),
                Ok(_) => widget_kids.push(kid_id),
                Err(_) => log::warn!("Skipping unresolvable kid of '{}'", name),
            }
        }
    }

    if child_fields.is_empty() {
        let node = FieldNode {
            kind: field_kind(dict, widget_kids.len()),
            name: name.clone(),
            id,
            kids: widget_kids,
        };
        if catalog.insert(name.clone(), node).is_some() {
            log::warn!("Duplicate field name '{}' in catalog; keeping last", name);
        }
    } else {
        // Non-terminal node: only its descendants enter the catalog.
        for child in child_fields {
            collect_field(doc, child, Some(&name), catalog);
        }
    }
}

fn field_kind(dict: &Dictionary, widget_count: usize) -> FieldKind {
    let ft = dict.get(b"FT").ok().and_then(|o| o.as_name().ok());
    match ft {
        Some(name) if name == b"Tx" => FieldKind::Text,
        Some(name) if name == b"Btn" => {
            let flags = dict
                .get(b"Ff")
                .ok()
                .and_then(|o| o.as_i64().ok())
                .unwrap_or(0);
            if flags & FF_RADIO != 0 || widget_count > 1 {
                FieldKind::RadioGroup
            } else {
                FieldKind::Checkbox
            }
        },
        _ => FieldKind::Unknown,
    }
}

/// Resolve an object to a dictionary, following at most a chain of
/// references. Streams are not dictionaries for catalog purposes.
pub(crate) fn deref_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Dictionary(d) => Some(d),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|o| deref_dict(doc, o)),
        _ => None,
    }
}

/// Resolve an object to an array, following references.
pub(crate) fn deref_array<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a [Object]> {
    match obj {
        Object::Array(a) => Some(a),
        Object::Reference(id) => doc
            .get_object(*id)
            .ok()
            .and_then(|o| deref_array(doc, o)),
        _ => None,
    }
}

/// Decode a PDF string object to UTF-8, lossily.
pub(crate) fn string_value(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn doc_with_fields(field_dicts: Vec<Object>) -> Document {
        let mut doc = Document::with_version("1.5");
        let mut refs = Vec::new();
        for dict in field_dicts {
            refs.push(Object::Reference(doc.add_object(dict)));
        }
        let acro_id = doc.add_object(dictionary! { "Fields" => Object::Array(refs) });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "AcroForm" => Object::Reference(acro_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc
    }

    #[test]
    fn test_empty_catalog_without_acroform() {
        let mut doc = Document::with_version("1.5");
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog" });
        doc.trailer.set("Root", Object::Reference(catalog_id));
        assert!(read_catalog(&doc).is_empty());
    }

    #[test]
    fn test_text_and_checkbox_kinds() {
        let doc = doc_with_fields(vec![
            Object::Dictionary(dictionary! {
                "T" => Object::string_literal("name"),
                "FT" => "Tx",
            }),
            Object::Dictionary(dictionary! {
                "T" => Object::string_literal("agree"),
                "FT" => "Btn",
            }),
        ]);
        let catalog = read_catalog(&doc);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["name"].kind, FieldKind::Text);
        assert_eq!(catalog["agree"].kind, FieldKind::Checkbox);
    }

    #[test]
    fn test_radio_flag_marks_group() {
        let doc = doc_with_fields(vec![Object::Dictionary(dictionary! {
            "T" => Object::string_literal("choice"),
            "FT" => "Btn",
            "Ff" => FF_RADIO,
        })]);
        let catalog = read_catalog(&doc);
        assert_eq!(catalog["choice"].kind, FieldKind::RadioGroup);
    }

    #[test]
    fn test_widget_kids_not_top_level() {
        let mut doc = Document::with_version("1.5");
        let kid_a = doc.add_object(dictionary! { "Subtype" => "Widget" });
        let kid_b = doc.add_object(dictionary! { "Subtype" => "Widget" });
        let field = doc.add_object(dictionary! {
            "T" => Object::string_literal("group"),
            "FT" => "Btn",
            "Kids" => Object::Array(vec![
                Object::Reference(kid_a),
                Object::Reference(kid_b),
            ]),
        });
        let acro_id = doc.add_object(dictionary! {
            "Fields" => Object::Array(vec![Object::Reference(field)]),
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "AcroForm" => Object::Reference(acro_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let catalog = read_catalog(&doc);
        assert_eq!(catalog.len(), 1);
        let node = &catalog["group"];
        // Two widgets and no radio flag still reads as a group.
        assert_eq!(node.kind, FieldKind::RadioGroup);
        assert_eq!(node.kids.len(), 2);
    }

    #[test]
    fn test_hierarchical_names_are_qualified() {
        let mut doc = Document::with_version("1.5");
        let child = doc.add_object(dictionary! {
            "T" => Object::string_literal("street"),
            "FT" => "Tx",
        });
        let parent = doc.add_object(dictionary! {
            "T" => Object::string_literal("address"),
            "Kids" => Object::Array(vec![Object::Reference(child)]),
        });
        let acro_id = doc.add_object(dictionary! {
            "Fields" => Object::Array(vec![Object::Reference(parent)]),
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "AcroForm" => Object::Reference(acro_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let catalog = read_catalog(&doc);
        assert!(catalog.contains_key("address.street"));
        assert!(!catalog.contains_key("address"));
    }
}
