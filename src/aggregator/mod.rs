//! Aggregation of visit records into summary statistics.
//!
//! This module computes:
//! - Patient-wide means per metric (the baseline)
//! - Per-visit means and deltas from that baseline
//! - Visit counts for demographic summaries

pub mod means;
pub mod summary;

// Re-export main types and functions
pub use means::{patient_means, visit_count, visit_delta, visit_mean, MetricMeans};
pub use summary::{summarize_patient, visit_deltas, AggregateSummary, MetricDelta, VisitDelta};
