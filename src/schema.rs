//! The fixed field vocabulary of the weekly job-search log form.
//!
//! The form carries three header fields plus three repeated contact blocks.
//! Block fields are named with a `c1-`/`c2-`/`c3-` prefix followed by a
//! fixed suffix. The vocabulary here is a superset of any one revision of
//! the form; the value writer silently skips names a given document lacks.

/// Header field: claimant name.
pub const HEADER_NAME: &str = "name";
/// Header field: claimant ID or SSN.
pub const HEADER_SSN: &str = "ssn";
/// Header field: week-ending date.
pub const HEADER_WEEK_ENDING: &str = "week-ending";

/// Number of contact blocks on the form. Always fully written, even when
/// fewer input records are supplied.
pub const BLOCK_COUNT: usize = 3;

/// Direct text suffixes of a contact block, in form order.
pub const SUFFIX_CONTACT_DATE: &str = "contact-date";
/// Job title or reference number.
pub const SUFFIX_JOB_TITLE: &str = "job-title";
/// Employer/business name.
pub const SUFFIX_BUSINESS_NAME: &str = "business-name";
/// Employer street address.
pub const SUFFIX_EMPLOYER_ADDRESS: &str = "employer-address";
/// Employer city.
pub const SUFFIX_EMPLOYER_CITY: &str = "employer-city";
/// Employer state.
pub const SUFFIX_EMPLOYER_STATE: &str = "employer-state";
/// Employer website or email.
pub const SUFFIX_EMPLOYER_WEBSITE_OR_EMAIL: &str = "employer-website-or-email";
/// Employer phone number.
pub const SUFFIX_EMPLOYER_PHONE: &str = "employer-phone";

/// Contact-method checkbox labels and their field suffixes.
///
/// Method labels are matched against input values with *exact*
/// case-insensitive equality, never fuzzily: the labels are short and prone
/// to false substring hits ("mail" inside "email").
pub const CONTACT_METHODS: [(&str, &str); 6] = [
    ("In person", "contact-method-in-person"),
    ("Phone", "contact-method-phone"),
    ("Email", "contact-method-email"),
    ("Mail", "contact-method-mail"),
    ("Fax", "contact-method-fax"),
    ("Online", "contact-method-online"),
];

/// Radio group: what kind of activity the record describes
/// (employer contact / WorkSource activity / other activity).
pub const SUFFIX_ACTIVITY: &str = "activity";
/// Radio group: type of employer contact (application, interview, ...).
pub const SUFFIX_CONTACT_TYPE: &str = "contact-type";
/// Free-text overflow, written when the contact type resolves to the
/// generic "other" bucket.
pub const SUFFIX_CONTACT_TYPE_OTHER: &str = "contact-type-other";

/// WorkSource activity detail suffixes.
pub const SUFFIX_WORKSOURCE_DATE: &str = "worksource-activity-date";
/// WorkSource office name.
pub const SUFFIX_WORKSOURCE_OFFICE: &str = "worksource-activity-office";
/// WorkSource staff member contacted.
pub const SUFFIX_WORKSOURCE_STAFF: &str = "worksource-activity-staff";
/// Description of the WorkSource activity.
pub const SUFFIX_WORKSOURCE_DESCRIPTION: &str = "worksource-activity-description";
/// Hours spent on the WorkSource activity.
pub const SUFFIX_WORKSOURCE_HOURS: &str = "worksource-activity-hours";

/// Other-activity detail suffixes.
pub const SUFFIX_OTHER_ACTIVITY_DATE: &str = "other-activity-date";
/// Description of the other activity.
pub const SUFFIX_OTHER_ACTIVITY_DESCRIPTION: &str = "other-activity-description";

/// Build the full field name for a block (1-based) and suffix.
pub fn block_field(block: usize, suffix: &str) -> String {
    format!("c{}-{}", block, suffix)
}
