//! Block orchestrator: drives a complete fill run.
//!
//! A run walks a fixed state machine — clone the form structure, write the
//! header, write exactly three contact blocks, serialize. Blocks are
//! processed sequentially because they all mutate the single output
//! document, which the orchestrator owns exclusively for the run's
//! duration. Fewer than three input records is fine: missing blocks are
//! written from an all-empty record so the output is always in a known,
//! fully-written state.
//!
//! Failure handling follows the taxonomy in [`crate::error`]: only the
//! document read (done by the caller) is fatal. A record whose enrichment
//! lookup fails proceeds with its original values and the failure is
//! recorded in the [`RunReport`].

use std::path::Path;

use lopdf::Document;

use crate::catalog::read_catalog;
use crate::document;
use crate::enrich::{self, ContactLookup};
use crate::error::Result;
use crate::fill::ValueWriter;
use crate::input::{ContactRecord, WeeklyLog};
use crate::resolve;
use crate::schema;

/// Progress of a fill run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing done yet.
    Init,
    /// Output document cloned and flagged.
    ClonedStructure,
    /// Header fields written.
    HeaderWritten,
    /// Contact block 1..=3 written.
    BlockWritten(u8),
    /// Output serialized to disk.
    Serialized,
    /// Run complete.
    Done,
}

/// One record's failed enrichment lookup. Non-fatal.
#[derive(Debug, Clone)]
pub struct EnrichmentFailure {
    /// 1-based block index.
    pub block: usize,
    /// The business name that was looked up.
    pub business_name: String,
    /// Why the lookup failed.
    pub reason: String,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final state reached.
    pub state: RunState,
    /// Records whose enrichment failed and proceeded un-enriched.
    pub enrichment_failures: Vec<EnrichmentFailure>,
}

/// Orchestrates one fill of the weekly log form.
pub struct FillRun<'a> {
    lookup: Option<&'a dyn ContactLookup>,
}

impl Default for FillRun<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FillRun<'a> {
    /// A run without contact enrichment.
    pub fn new() -> Self {
        Self { lookup: None }
    }

    /// Enable contact enrichment through the given lookup service.
    pub fn with_lookup(mut self, lookup: &'a dyn ContactLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Fill the form and serialize it to `out_path`.
    pub fn run(
        &self,
        source: &Document,
        data: &WeeklyLog,
        out_path: impl AsRef<Path>,
    ) -> Result<RunReport> {
        let (mut out, mut report) = self.fill(source, data);
        document::save_document(&mut out, out_path)?;
        advance(&mut report.state, RunState::Serialized);
        advance(&mut report.state, RunState::Done);
        Ok(report)
    }

    /// Fill the form in memory, returning the mutated output document and
    /// the run report. Infallible by design: every per-field and
    /// per-record failure mode degrades instead of aborting.
    pub fn fill(&self, source: &Document, data: &WeeklyLog) -> (Document, RunReport) {
        let mut state = RunState::Init;
        let mut failures = Vec::new();

        let catalog = read_catalog(source);
        let mut out = document::clone_with_form(source);
        advance(&mut state, RunState::ClonedStructure);

        let mut writer = ValueWriter::new(&mut out, &catalog);
        writer.set_text(schema::HEADER_NAME, data.name.as_deref());
        writer.set_text(schema::HEADER_SSN, data.ssn.as_deref());
        writer.set_text(schema::HEADER_WEEK_ENDING, data.week_ending.as_deref());
        advance(&mut state, RunState::HeaderWritten);

        for block in 1..=schema::BLOCK_COUNT {
            let mut record = data
                .contacts
                .get(block - 1)
                .cloned()
                .unwrap_or_default();
            self.enrich_record(block, &mut record, &mut failures);
            write_block(&mut writer, block, &record);
            advance(&mut state, RunState::BlockWritten(block as u8));
        }

        let report = RunReport {
            state,
            enrichment_failures: failures,
        };
        (out, report)
    }

    fn enrich_record(
        &self,
        block: usize,
        record: &mut ContactRecord,
        failures: &mut Vec<EnrichmentFailure>,
    ) {
        let Some(lookup) = self.lookup else { return };
        if !enrich::wants_enrichment(record) {
            return;
        }
        let business_name = record.business_name.clone().unwrap_or_default();
        match lookup.lookup(&business_name) {
            Ok(details) => {
                log::info!("Enriched contact details for '{}'", business_name);
                enrich::merge_details(record, details);
            },
            Err(e) => {
                log::warn!(
                    "Enrichment failed for '{}' (block {}): {}; keeping original values",
                    business_name,
                    block,
                    e
                );
                failures.push(EnrichmentFailure {
                    block,
                    business_name,
                    reason: e.to_string(),
                });
            },
        }
    }
}

/// Write one contact block: direct text attributes, the contact-method
/// checkboxes, the two choice groups, and the detail/overflow fields.
fn write_block(writer: &mut ValueWriter<'_>, block: usize, record: &ContactRecord) {
    let field = |suffix: &str| schema::block_field(block, suffix);

    writer.set_text(&field(schema::SUFFIX_CONTACT_DATE), record.date.as_deref());
    writer.set_text(&field(schema::SUFFIX_JOB_TITLE), record.job_title.as_deref());
    writer.set_text(
        &field(schema::SUFFIX_BUSINESS_NAME),
        record.business_name.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_EMPLOYER_ADDRESS),
        record.address.as_deref(),
    );
    writer.set_text(&field(schema::SUFFIX_EMPLOYER_CITY), record.city.as_deref());
    writer.set_text(
        &field(schema::SUFFIX_EMPLOYER_STATE),
        record.state.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_EMPLOYER_WEBSITE_OR_EMAIL),
        record.website_or_email.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_EMPLOYER_PHONE),
        record.phone.as_deref(),
    );

    // Method checkboxes match their label exactly (case-insensitive), not
    // fuzzily: "email" must never tick the mail box.
    for (label, suffix) in schema::CONTACT_METHODS {
        let on = record
            .contact_methods
            .iter()
            .any(|m| m.trim().eq_ignore_ascii_case(label));
        writer.set_checkbox(&field(suffix), on);
    }

    if let Some(activity) = record.activity.as_deref() {
        writer.set_radio_group(
            &field(schema::SUFFIX_ACTIVITY),
            &resolve::normalize_choice(activity),
        );
    }

    if let Some(contact_type) = record.contact_type.as_deref() {
        let chosen = writer.set_radio_group(
            &field(schema::SUFFIX_CONTACT_TYPE),
            &resolve::normalize_choice(contact_type),
        );
        let is_other = chosen
            .map(|c| c.to_ascii_lowercase().contains("other"))
            .unwrap_or(false);
        if is_other {
            let overflow = record
                .contact_type_other
                .as_deref()
                .or(Some(contact_type));
            writer.set_text(&field(schema::SUFFIX_CONTACT_TYPE_OTHER), overflow);
        }
    }

    writer.set_text(
        &field(schema::SUFFIX_WORKSOURCE_DATE),
        record.worksource_date.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_WORKSOURCE_OFFICE),
        record.worksource_office.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_WORKSOURCE_STAFF),
        record.worksource_staff.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_WORKSOURCE_DESCRIPTION),
        record.worksource_description.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_WORKSOURCE_HOURS),
        record.worksource_hours.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_OTHER_ACTIVITY_DATE),
        record.other_activity_date.as_deref(),
    );
    writer.set_text(
        &field(schema::SUFFIX_OTHER_ACTIVITY_DESCRIPTION),
        record.other_activity_description.as_deref(),
    );
}

fn advance(state: &mut RunState, next: RunState) {
    log::debug!("Run state {:?} -> {:?}", state, next);
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    #[test]
    fn test_fill_tolerates_a_document_without_a_form() {
        let mut doc = Document::with_version("1.5");
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog" });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let data = WeeklyLog {
            name: Some("Ada Lovelace".to_string()),
            contacts: vec![ContactRecord::default()],
            ..Default::default()
        };
        let (_, report) = FillRun::new().fill(&doc, &data);
        assert_eq!(report.state, RunState::BlockWritten(3));
        assert!(report.enrichment_failures.is_empty());
    }
}
