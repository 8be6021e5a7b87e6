//! Contact enrichment: look up a business's public contact details.
//!
//! An external service answers "what is this company's address, website,
//! phone" for records that name an employer but leave those attributes
//! blank. Enrichment is strictly best-effort: any failure leaves the record
//! exactly as the user wrote it and is reported, never propagated. The
//! lookup handle is constructed once at the entry point and passed into the
//! orchestrator; there is no process-wide client state.

use std::time::Duration;

use serde::Deserialize;

use crate::input::ContactRecord;

/// Contact details returned by a successful lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    /// Street address of the primary office.
    pub address: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Official website or contact email.
    pub website_or_email: String,
    /// Phone number.
    pub phone: String,
    /// URLs the service derived the details from.
    pub source_urls: Vec<String>,
}

/// Errors a lookup can produce. These never cross the orchestrator
/// boundary; they are downgraded to a per-record report entry.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Transport-level failure (connection, timeout, non-2xx status).
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but with an error payload or a body that does
    /// not match the expected schema.
    #[error("lookup returned an error: {0}")]
    Service(String),
}

/// A contact-details lookup service.
pub trait ContactLookup {
    /// Resolve contact details for a business name.
    fn lookup(&self, business_name: &str) -> std::result::Result<ContactDetails, LookupError>;
}

/// HTTP-backed lookup: POSTs `{"business_name": ...}` to a configured
/// endpoint and expects a `ContactDetails` JSON body, or `{"error": ...}`
/// when the business cannot be found.
pub struct HttpContactLookup {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpContactLookup {
    /// Build a lookup client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> std::result::Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl ContactLookup for HttpContactLookup {
    fn lookup(&self, business_name: &str) -> std::result::Result<ContactDetails, LookupError> {
        log::debug!("Looking up contact details for '{}'", business_name);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "business_name": business_name }))
            .send()?
            .error_for_status()?;
        let body: serde_json::Value = response.json()?;
        if let Some(message) = body.get("error").and_then(|v| v.as_str()) {
            return Err(LookupError::Service(message.to_string()));
        }
        serde_json::from_value(body)
            .map_err(|e| LookupError::Service(format!("malformed response: {}", e)))
    }
}

/// Merge looked-up details into a record, filling only attributes the
/// record left blank. User-supplied values stay authoritative.
pub fn merge_details(record: &mut ContactRecord, details: ContactDetails) {
    fill_blank(&mut record.address, details.address);
    fill_blank(&mut record.city, details.city);
    fill_blank(&mut record.state, details.state);
    fill_blank(&mut record.website_or_email, details.website_or_email);
    fill_blank(&mut record.phone, details.phone);
}

/// True when the record would benefit from a lookup at all.
pub fn wants_enrichment(record: &ContactRecord) -> bool {
    let named = record
        .business_name
        .as_deref()
        .is_some_and(|n| !n.trim().is_empty());
    named
        && [
            &record.address,
            &record.city,
            &record.state,
            &record.website_or_email,
            &record.phone,
        ]
        .iter()
        .any(|slot| is_blank(slot))
}

fn fill_blank(slot: &mut Option<String>, value: String) {
    if is_blank(slot) && !value.trim().is_empty() {
        *slot = Some(value);
    }
}

fn is_blank(slot: &Option<String>) -> bool {
    slot.as_deref().map_or(true, |s| s.trim().is_empty())
}
