//! Visit Vitals
//!
//! Vital-sign aggregation for patient visit dashboards.
//!
//! The crate computes per-metric means, per-visit means and
//! deltas from a patient-wide baseline, then prepares rows and
//! series a presentation layer can draw directly.
//!
//! ## Getting Started
//!
//! ```ignore
//! use visit_vitals::provider::{DataProvider, DemoProvider};
//! use visit_vitals::report::build_patient_report;
//!
//! let patients = DemoProvider::new().patients()?;
//! let report = build_patient_report(&patients[0])?;
//! ```
//!
//! Or use the CLI:
//!
//! ```bash
//! visit-vitals overview --patient 101
//! ```

pub mod aggregator;
pub mod commands;
pub mod model;
pub mod output;
pub mod provider;
pub mod report;
pub mod utils;
