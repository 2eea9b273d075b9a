use std::path::PathBuf;
use thiserror::Error;

/// The main error type for eafkit operations.
///
/// Document construction is fail-fast: the first of these aborts the build
/// for that file and no partial document is returned.
#[derive(Debug, Error)]
pub enum EafError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse EAF XML from {path}: {message}")]
    XmlParse { path: PathBuf, message: String },

    #[error("Malformed tier group at tier '{tier_id}': {message}")]
    MalformedTierGroup { tier_id: String, message: String },

    #[error("Missing '{attribute}' attribute in <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Missing <{element}> in <{parent}>")]
    MissingElement {
        parent: &'static str,
        element: &'static str,
    },

    #[error("Tier '{tier_id}' holds annotation '{annotation_id}' that is not an {expected}")]
    UnexpectedAnnotationKind {
        tier_id: String,
        annotation_id: String,
        expected: &'static str,
    },

    #[error("Unresolved time slot reference '{id}'")]
    UnresolvedTimeSlot { id: String },

    #[error(
        "Annotation '{annotation_id}' in language '{language}' references unknown transcription annotation '{annotation_ref}'"
    )]
    UnresolvedAnnotationReference {
        language: String,
        annotation_id: String,
        annotation_ref: String,
    },

    #[error("Time slot '{id}' defined twice with different values ({first} ms vs {second} ms)")]
    DuplicateTimeSlot { id: String, first: u64, second: u64 },

    #[error("Duplicate annotation ID '{id}'")]
    DuplicateAnnotationId { id: String },

    #[error(
        "Row count mismatch in language '{language}': transcription={transcription}, confidence={confidence}, is_translation={is_translation}, manually_corrected={manually_corrected}"
    )]
    RowCountMismatch {
        language: String,
        transcription: usize,
        confidence: usize,
        is_translation: usize,
        manually_corrected: usize,
    },

    #[error(
        "Annotation '{annotation_id}' in language '{language}' ends before it starts ({start_ms} ms > {end_ms} ms)"
    )]
    InvalidInterval {
        language: String,
        annotation_id: String,
        start_ms: u64,
        end_ms: u64,
    },

    #[error("Speech duration overflowed in language '{language}'")]
    DurationOverflow { language: String },

    #[error("Failed to write document JSON to {path}: {source}")]
    DocumentJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize report as JSON: {0}")]
    ReportJson(#[source] serde_json::Error),

    #[error("Failed to write CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Batch finished with {failed} of {total} file(s) failing")]
    BatchFailed { failed: usize, total: usize },
}
