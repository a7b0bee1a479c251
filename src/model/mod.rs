//! Domain model for patient visit records.
//!
//! This module defines:
//! - The closed set of tracked vital-sign metrics
//! - Visits with their vital series, triage level and drug list
//! - Patients owning a chronological visit history

pub mod metric;
pub mod patient;
pub mod visit;

// Re-export main types
pub use metric::Metric;
pub use patient::Patient;
pub use visit::{parse_time, TriageLevel, Visit, VitalSeries};
