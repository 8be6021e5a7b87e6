//! Value writer: applies resolved values to named fields in the output
//! document.
//!
//! All three operations are idempotent and total: a field name the catalog
//! does not contain is a logged no-op, never an error, because the input
//! schema is a superset of any one form revision's actual fields. Button
//! writes set `/V` on the field and `/AS` on every widget kid, so a field
//! duplicated across pages updates everywhere, not just on the first page.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::appearance::{self, FALLBACK_ON_STATE, OFF_STATE};
use crate::catalog::{FieldCatalog, FieldNode};
use crate::resolve;

/// Writes values into an output document through a catalog built from the
/// source it was cloned from (object ids are shared between the two).
pub struct ValueWriter<'a> {
    doc: &'a mut Document,
    catalog: &'a FieldCatalog,
}

impl<'a> ValueWriter<'a> {
    /// Create a writer over an output document and its field catalog.
    pub fn new(doc: &'a mut Document, catalog: &'a FieldCatalog) -> Self {
        Self { doc, catalog }
    }

    /// Write a text value. `None` writes the empty string, so a filled
    /// block is always in a known state rather than keeping stale content.
    pub fn set_text(&mut self, name: &str, value: Option<&str>) {
        let Some(node) = self.lookup(name) else { return };
        let id = node.id;
        let text = value.unwrap_or("");
        log::debug!("set_text '{}' = {:?}", name, text);
        if let Some(dict) = field_dict_mut(self.doc, id) {
            dict.set("V", Object::string_literal(text));
        }
    }

    /// Check or clear a two-state checkbox. The legal on-state is
    /// discovered from appearance metadata; `"Yes"` is assumed when the
    /// field declares none.
    pub fn set_checkbox(&mut self, name: &str, on: bool) {
        let Some(node) = self.lookup(name) else { return };
        let state = if on {
            appearance::on_states(self.doc, node)
                .into_iter()
                .next()
                .unwrap_or_else(|| FALLBACK_ON_STATE.to_string())
        } else {
            OFF_STATE.to_string()
        };
        log::debug!("set_checkbox '{}' = {}", name, state);
        self.write_button_state(node, &state, |_| true);
    }

    /// Select one member of a multi-state exclusive group. An empty
    /// `desired` is a no-op. Returns the chosen state identifier, letting
    /// the caller react to which bucket won (e.g. the "other" overflow).
    pub fn set_radio_group(&mut self, name: &str, desired: &str) -> Option<String> {
        if desired.trim().is_empty() {
            return None;
        }
        let node = self.lookup(name)?;
        let candidates = appearance::on_states(self.doc, node);
        let chosen = resolve::resolve(&candidates, desired)?.to_string();
        log::debug!("set_radio_group '{}': {:?} -> {}", name, desired, chosen);
        // Only kids that actually render the chosen state show it as
        // selected; the rest fall back to Off.
        let doc = &*self.doc;
        let selected: Vec<ObjectId> = node
            .kids
            .iter()
            .copied()
            .filter(|&kid| {
                appearance::widget_states(doc, kid)
                    .iter()
                    .any(|s| s == &chosen)
            })
            .collect();
        self.write_button_state(node, &chosen, |kid| selected.contains(&kid));
        Some(chosen)
    }

    fn lookup(&self, name: &str) -> Option<&'a FieldNode> {
        let node = self.catalog.get(name);
        if node.is_none() {
            log::debug!("Field '{}' not present in this document; skipping", name);
        }
        node
    }

    /// Set `/V` on the field dictionary and `/AS` on each widget. Widgets
    /// for which `selects` is false show the off state instead.
    fn write_button_state(
        &mut self,
        node: &FieldNode,
        state: &str,
        selects: impl Fn(ObjectId) -> bool,
    ) {
        if let Some(dict) = field_dict_mut(self.doc, node.id) {
            dict.set("V", Object::Name(state.as_bytes().to_vec()));
            if node.kids.is_empty() {
                // Merged field/widget dictionary.
                dict.set("AS", Object::Name(state.as_bytes().to_vec()));
            }
        }
        for &kid in &node.kids {
            let shown = if selects(kid) { state } else { OFF_STATE };
            if let Some(dict) = field_dict_mut(self.doc, kid) {
                dict.set("AS", Object::Name(shown.as_bytes().to_vec()));
            }
        }
    }
}

fn field_dict_mut(doc: &mut Document, id: ObjectId) -> Option<&mut Dictionary> {
    match doc.get_object_mut(id).and_then(|o| o.as_dict_mut()) {
        Ok(dict) => Some(dict),
        Err(_) => {
            log::warn!("Field object {} {} is not a dictionary", id.0, id.1);
            None
        },
    }
}
