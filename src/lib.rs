//! # esd-log-fill
//!
//! Fills a Washington ESD-style weekly job-search log PDF form from a YAML
//! data file. The interesting part is the form-field resolution engine: the
//! blank form's exact layout (widget kinds, legal checkbox on-states, radio
//! export values) is unknown until the document is inspected, so the engine
//! discovers legal values from per-widget appearance metadata and maps
//! free-form input values onto them with a tiered fuzzy matcher.
//!
//! ## Pipeline
//!
//! 1. [`document::load_document`] reads the blank form.
//! 2. [`catalog::read_catalog`] extracts the flat field-name → field map.
//! 3. [`document::clone_with_form`] clones the document and sets
//!    `/NeedAppearances` so viewers regenerate glyphs from logical values.
//! 4. [`run::FillRun`] writes the header and exactly three contact blocks,
//!    optionally enriching each record through a [`enrich::ContactLookup`].
//! 5. The filled document is serialized back to disk.
//!
//! Field writes never fail on fields the document happens not to have: the
//! input schema is a superset of any one form revision, so absent fields are
//! logged and skipped (ISO 32000-1:2008 §12.7 governs the AcroForm
//! structures this crate manipulates through `lopdf`).

#![warn(missing_docs)]

pub mod appearance;
pub mod catalog;
pub mod document;
pub mod enrich;
pub mod error;
pub mod fill;
pub mod input;
pub mod resolve;
pub mod run;
pub mod schema;

pub use error::{Error, Result};
pub use run::{FillRun, RunReport, RunState};
