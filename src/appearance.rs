//! Appearance-state inspection for button fields.
//!
//! A checkbox or radio widget declares its legal states as the keys of its
//! normal-appearance sub-dictionary (`/AP /N`, ISO 32000-1:2008 §12.5.5).
//! Everything except the canonical "Off" state is an on-state. The legal
//! values of a field are therefore discovered, not assumed: the inspector
//! scans the field's own appearance dictionary first, then each widget
//! kid's, preserving first-seen order and dropping duplicates.
//!
//! States are recomputed on every lookup. The forms involved are small, so
//! recomputation is cheaper than guarding a cache against staleness after
//! writes.

use lopdf::{Dictionary, Document, ObjectId};

use crate::catalog::{deref_dict, FieldNode};

/// The canonical off state (PDF uses the name `Off`).
pub const OFF_STATE: &str = "Off";

/// Synthetic on-state used when a field exposes no appearance metadata at
/// all. Best-effort: most generators use `Yes`, but nothing verifies this
/// against the actual document.
pub const FALLBACK_ON_STATE: &str = "Yes";

/// Enumerate the on-states of a field, in traversal order.
///
/// Never returns an empty list: when no appearance metadata is found the
/// single fallback state `"Yes"` is returned so checkbox writes stay total.
pub fn on_states(doc: &Document, node: &FieldNode) -> Vec<String> {
    let mut states = Vec::new();
    if let Ok(dict) = doc.get_dictionary(node.id) {
        collect_states(doc, dict, &mut states);
    }
    for &kid in &node.kids {
        if let Ok(dict) = doc.get_dictionary(kid) {
            collect_states(doc, dict, &mut states);
        }
    }
    if states.is_empty() {
        log::debug!(
            "Field '{}' has no appearance states; assuming '{}'",
            node.name,
            FALLBACK_ON_STATE
        );
        states.push(FALLBACK_ON_STATE.to_string());
    }
    states
}

/// Enumerate the on-states declared by a single widget dictionary.
///
/// Unlike [`on_states`] this has no fallback; an empty result means the
/// widget declares no alternate appearances.
pub(crate) fn widget_states(doc: &Document, id: ObjectId) -> Vec<String> {
    let mut states = Vec::new();
    if let Ok(dict) = doc.get_dictionary(id) {
        collect_states(doc, dict, &mut states);
    }
    states
}

/// Append the non-off normal-appearance keys of one annotation dictionary,
/// skipping names already collected.
fn collect_states(doc: &Document, annot: &Dictionary, out: &mut Vec<String>) {
    let Some(ap) = annot.get(b"AP").ok().and_then(|o| deref_dict(doc, o)) else {
        return;
    };
    // /N may also be a bare appearance stream (text fields); only a
    // dictionary carries named states.
    let Some(normal) = ap.get(b"N").ok().and_then(|o| deref_dict(doc, o)) else {
        return;
    };
    for (key, _) in normal.iter() {
        let state = String::from_utf8_lossy(key).into_owned();
        if state.eq_ignore_ascii_case(OFF_STATE) {
            continue;
        }
        if !out.iter().any(|seen| seen == &state) {
            out.push(state);
        }
    }
}
