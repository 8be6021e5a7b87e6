//! Shared fixture: builds a synthetic weekly-log form in memory.
//!
//! The fixture mirrors the real form's vocabulary — three header text
//! fields plus three contact blocks, each with its text fields, six
//! contact-method checkboxes, and the two radio groups.

use esd_log_fill::catalog::read_catalog;
use lopdf::{dictionary, Document, Object, ObjectId};

pub const ACTIVITY_STATES: [&str; 3] =
    ["Employer-Contact", "Worksource-Activity", "Other-Activity"];
pub const CONTACT_TYPE_STATES: [&str; 4] = ["Application", "Interview", "Inquiry", "Other"];

pub const TEXT_SUFFIXES: [&str; 16] = [
    "contact-date",
    "job-title",
    "business-name",
    "employer-address",
    "employer-city",
    "employer-state",
    "employer-website-or-email",
    "employer-phone",
    "contact-type-other",
    "worksource-activity-date",
    "worksource-activity-office",
    "worksource-activity-staff",
    "worksource-activity-description",
    "worksource-activity-hours",
    "other-activity-date",
    "other-activity-description",
];

pub const METHOD_SUFFIXES: [&str; 6] = [
    "contact-method-in-person",
    "contact-method-phone",
    "contact-method-email",
    "contact-method-mail",
    "contact-method-fax",
    "contact-method-online",
];

fn text_field(doc: &mut Document, name: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "T" => Object::string_literal(name),
        "FT" => "Tx",
        "Subtype" => "Widget",
    })
}

fn checkbox_field(doc: &mut Document, name: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "T" => Object::string_literal(name),
        "FT" => "Btn",
        "Subtype" => "Widget",
        "V" => Object::Name(b"Off".to_vec()),
        "AP" => Object::Dictionary(dictionary! {
            "N" => Object::Dictionary(dictionary! {
                "Yes" => Object::Null,
                "Off" => Object::Null,
            }),
        }),
    })
}

fn radio_group(doc: &mut Document, name: &str, states: &[&str]) -> ObjectId {
    let field_id = doc.new_object_id();
    let kids: Vec<Object> = states
        .iter()
        .map(|state| {
            let kid = doc.add_object(dictionary! {
                "Subtype" => "Widget",
                "Parent" => Object::Reference(field_id),
                "AS" => Object::Name(b"Off".to_vec()),
                "AP" => Object::Dictionary(dictionary! {
                    "N" => Object::Dictionary(dictionary! {
                        *state => Object::Null,
                        "Off" => Object::Null,
                    }),
                }),
            });
            Object::Reference(kid)
        })
        .collect();
    doc.objects.insert(
        field_id,
        Object::Dictionary(dictionary! {
            "T" => Object::string_literal(name),
            "FT" => "Btn",
            "Ff" => 1_i64 << 15,
            "Kids" => Object::Array(kids),
        }),
    );
    field_id
}

/// Build the full three-block sample form.
pub fn sample_form() -> Document {
    let mut doc = Document::with_version("1.5");
    let mut fields = Vec::new();

    for name in ["name", "ssn", "week-ending"] {
        fields.push(text_field(&mut doc, name));
    }
    for block in 1..=3 {
        for suffix in TEXT_SUFFIXES {
            fields.push(text_field(&mut doc, &format!("c{}-{}", block, suffix)));
        }
        for suffix in METHOD_SUFFIXES {
            fields.push(checkbox_field(&mut doc, &format!("c{}-{}", block, suffix)));
        }
        fields.push(radio_group(
            &mut doc,
            &format!("c{}-activity", block),
            &ACTIVITY_STATES,
        ));
        fields.push(radio_group(
            &mut doc,
            &format!("c{}-contact-type", block),
            &CONTACT_TYPE_STATES,
        ));
    }

    let field_refs: Vec<Object> = fields.iter().map(|&id| Object::Reference(id)).collect();
    let acro = doc.add_object(dictionary! { "Fields" => Object::Array(field_refs) });

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![Object::Reference(page_id)]),
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
        "AcroForm" => Object::Reference(acro),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

fn field_value(doc: &Document, name: &str) -> Option<Object> {
    let catalog = read_catalog(doc);
    let node = catalog.get(name)?;
    doc.get_dictionary(node.id).ok()?.get(b"V").ok().cloned()
}

/// The string `/V` of a text field, if set.
pub fn text_value(doc: &Document, name: &str) -> Option<String> {
    match field_value(doc, name)? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        _ => None,
    }
}

/// The name `/V` of a button field, if set.
pub fn state_value(doc: &Document, name: &str) -> Option<String> {
    match field_value(doc, name)? {
        Object::Name(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        _ => None,
    }
}

/// Every field's `/V`, for whole-document comparisons.
pub fn all_values(doc: &Document) -> Vec<(String, Option<Object>)> {
    read_catalog(doc)
        .keys()
        .map(|name| (name.clone(), field_value(doc, name)))
        .collect()
}
