//! Structured-input loader: the weekly YAML data file.
//!
//! The file carries the header values plus a `contacts` sequence of zero or
//! more records. Every attribute is optional; the orchestrator pads missing
//! records so the output always has exactly three fully-written blocks.
//! Field aliases accept the key spellings older data files used.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// One week of job-search data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeeklyLog {
    /// Claimant name.
    pub name: Option<String>,
    /// Claimant ID or SSN.
    #[serde(alias = "id_or_ssn")]
    pub ssn: Option<String>,
    /// Week-ending date.
    pub week_ending: Option<String>,
    /// Contact/activity records, in form order. Length 0..N; only the
    /// first three are written.
    pub contacts: Vec<ContactRecord>,
}

/// One contact or activity entry. Produced externally; immutable once read
/// except for enrichment merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    /// Date of the contact.
    pub date: Option<String>,
    /// Job title or reference number.
    #[serde(alias = "job_title_or_ref")]
    pub job_title: Option<String>,
    /// Employer or business name; also the enrichment lookup key.
    #[serde(alias = "employer")]
    pub business_name: Option<String>,
    /// Employer street address.
    pub address: Option<String>,
    /// Employer city.
    pub city: Option<String>,
    /// Employer state.
    pub state: Option<String>,
    /// Employer website or email.
    pub website_or_email: Option<String>,
    /// Employer phone.
    pub phone: Option<String>,
    /// Contact methods used; a single string or a list in the data file.
    #[serde(alias = "contact_method", deserialize_with = "string_or_seq")]
    pub contact_methods: Vec<String>,
    /// Activity kind (employer contact / WorkSource / other).
    #[serde(alias = "kind")]
    pub activity: Option<String>,
    /// Type of employer contact (application, interview, ...).
    pub contact_type: Option<String>,
    /// Free-text used when the contact type is the "other" bucket.
    pub contact_type_other: Option<String>,
    /// WorkSource activity date.
    pub worksource_date: Option<String>,
    /// WorkSource office name.
    #[serde(alias = "office_name")]
    pub worksource_office: Option<String>,
    /// WorkSource staff member.
    pub worksource_staff: Option<String>,
    /// WorkSource activity description.
    pub worksource_description: Option<String>,
    /// Hours spent on the WorkSource activity.
    pub worksource_hours: Option<String>,
    /// Other-activity date.
    pub other_activity_date: Option<String>,
    /// Other-activity description.
    #[serde(alias = "documentation")]
    pub other_activity_description: Option<String>,
}

/// Accept either a single string or a sequence of strings.
fn string_or_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

/// Load and parse the weekly YAML data file.
pub fn load_weekly_log(path: impl AsRef<Path>) -> Result<WeeklyLog> {
    let path = path.as_ref();
    log::info!("Loading weekly data from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    let data: WeeklyLog = serde_yaml::from_str(&text)?;
    log::debug!("Parsed {} contact record(s)", data.contacts.len());
    Ok(data)
}
