//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::model::Metric;
use thiserror::Error;

/// Errors raised by the aggregator
///
/// Both variants are the same kind of failure: a mean was requested
/// over nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Empty input: no visits to aggregate")]
    NoVisits,

    #[error("Empty input: no {0} samples")]
    NoSamples(Metric),
}

impl AggregateError {
    /// True for every empty-input failure
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AggregateError::NoVisits | AggregateError::NoSamples(_))
    }
}

/// Errors that can occur while building or loading visit data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid triage level: {0}")]
    InvalidTriage(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Discharge at {discharged} precedes admission at {admitted} on {date}")]
    DischargeBeforeAdmission {
        date: chrono::NaiveDate,
        admitted: chrono::NaiveTime,
        discharged: chrono::NaiveTime,
    },

    #[error("Visits for patient {patient_id} are not chronological (visit {index})")]
    VisitsOutOfOrder { patient_id: u32, index: usize },

    #[error("Duplicate patient id: {0}")]
    DuplicatePatient(u32),

    #[error("Failed to read dataset: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
