//! Output writers for report data.
//!
//! This module handles:
//! - JSON reports (written to disk or kept in memory)
//! - Text rendering with rounded means and signed deltas

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use text::{NO_DATA, format_delta, format_reading, render_demographics, render_patient_report, render_visit};
