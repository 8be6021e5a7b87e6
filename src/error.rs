//! Error types for the form filler.
//!
//! Only a handful of failures are fatal: an unreadable source document,
//! unparseable input data, and IO while serializing the output. Everything
//! else (absent fields, unmatched choice values, failed enrichment lookups)
//! degrades gracefully inside the engine and never surfaces here.

/// Result type alias for form-filler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error kinds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source PDF could not be read or is not a valid PDF. This is the
    /// one failure that aborts a run before any write happens.
    #[error("Failed to read PDF document: {0}")]
    DocumentRead(#[source] lopdf::Error),

    /// A PDF-level operation failed (serialization, malformed structure hit
    /// outside the tolerant read paths).
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The YAML data file could not be parsed.
    #[error("Invalid input data: {0}")]
    InputData(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_data_error_message() {
        let inner = serde_yaml::from_str::<u32>("not: a number").unwrap_err();
        let err = Error::from(inner);
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid input data"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
