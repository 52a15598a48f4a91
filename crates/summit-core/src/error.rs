//! Error types for summit-core operations.

use thiserror::Error;

/// Errors that abort a planning run. There is no partial output: the first
/// error encountered is returned and nothing else is computed.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// An `availableDates` entry is not an ISO calendar date (`YYYY-MM-DD`).
    #[error("Malformed date '{value}' for partner {email}: {source}")]
    MalformedDate {
        email: String,
        value: String,
        #[source]
        source: DateFormatError,
    },

    /// A partner record lacks a required field. `index` is the 0-based
    /// position of the record in the input list.
    #[error("Partner record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// The input document was not valid JSON, or had the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why an `availableDates` entry was rejected.
#[derive(Error, Debug)]
pub enum DateFormatError {
    /// Not exactly `YYYY-MM-DD`: wrong length, unpadded fields, a sign,
    /// whitespace or other separators.
    #[error("expected YYYY-MM-DD")]
    Shape,

    /// Well-shaped but not a real calendar date (e.g. 2017-02-30).
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Convenience alias used throughout summit-core.
pub type Result<T> = std::result::Result<T, PlannerError>;
