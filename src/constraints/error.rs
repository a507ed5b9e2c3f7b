use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a request from untrusted input.
///
/// Every variant carrying a `field` names the offending location as a path,
/// e.g. `people[0].hard_constraints[1].start_date`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date at '{field}': '{value}'. Expected YYYY-MM-DD.")]
    InvalidDate { field: String, value: String },

    #[error("Invalid interval at '{field}': start_date is after end_date.")]
    InvertedInterval { field: String },

    #[error("Invalid range: min_date {min_date} is after max_date {max_date}.")]
    InvertedRange {
        min_date: NaiveDate,
        max_date: NaiveDate,
    },

    #[error("Invalid constraint type at '{field}': '{value}'. Expected 'date' or 'interval'.")]
    UnknownConstraintType { field: String, value: String },

    #[error("Missing required field '{field}'.")]
    MissingField { field: String },

    #[error("Expected non-empty string at '{field}'.")]
    EmptyName { field: String },

    #[error("Duplicate person name found: '{0}'.")]
    DuplicateName(String),
}
