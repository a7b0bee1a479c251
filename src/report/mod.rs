//! Dashboard-ready data built from aggregates.
//!
//! This module handles:
//! - Demographics rows (visit counts per patient)
//! - Visit timeline and per-metric trend series
//! - Visit detail cards with means and signed deltas
//! - The complete versioned patient report

pub mod builder;
pub mod schema;

// Re-export main types and functions
pub use builder::{build_patient_report, demographics, metric_trend, timeline, visit_detail};
pub use schema::{
    DemographicsRow, MetricMean, MetricReading, MetricTrend, PatientReport, TimelinePoint,
    TrendPoint, VisitDetail,
};
