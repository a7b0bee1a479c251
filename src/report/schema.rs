//! Output schema definitions for dashboard data.
//!
//! These are the structures handed to the presentation layer and written
//! to JSON. The schema is versioned to allow future evolution.

use crate::model::Metric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level report for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub patient_id: u32,

    pub patient_name: String,

    pub visit_count: usize,

    /// Patient-wide mean per metric (the baseline for deltas)
    pub means: Vec<MetricMean>,

    /// KTAS per visit, chronological
    pub timeline: Vec<TimelinePoint>,

    /// Per-visit means for each metric, keyed by date
    pub trends: Vec<MetricTrend>,

    /// Detail card per visit
    pub visits: Vec<VisitDetail>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl PatientReport {
    /// Baseline for `metric`, if present
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        self.means.iter().find(|m| m.metric == metric).map(|m| m.mean)
    }

    /// Trend series for `metric`, if present
    pub fn trend(&self, metric: Metric) -> Option<&MetricTrend> {
        self.trends.iter().find(|t| t.metric == metric)
    }

    /// Drop means, trends and readings for metrics not in `metrics`
    ///
    /// An empty slice keeps everything.
    pub fn retain_metrics(&mut self, metrics: &[Metric]) {
        if metrics.is_empty() {
            return;
        }

        self.means.retain(|m| metrics.contains(&m.metric));
        self.trends.retain(|t| metrics.contains(&t.metric));
        for visit in &mut self.visits {
            visit.readings.retain(|r| metrics.contains(&r.metric));
        }
    }
}

/// Mean of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricMean {
    pub metric: Metric,
    pub mean: f64,
}

/// Row of the demographics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicsRow {
    pub id: u32,
    pub name: String,
    pub visit_count: usize,
}

/// One marker on the visit timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,

    /// KTAS label, e.g. "Level 2"
    pub ktas: String,
}

/// Per-visit mean of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,

    /// `None` when the visit has no samples for the metric
    pub mean: Option<f64>,
}

/// Line-chart series for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    pub metric: Metric,
    pub unit: String,
    pub points: Vec<TrendPoint>,
}

/// One metric as shown on a visit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub metric: Metric,
    pub unit: String,

    /// Mean within the visit, `None` for an empty series
    pub mean: Option<f64>,

    /// `mean - patient mean`, sign preserved
    pub delta: Option<f64>,

    /// Raw samples, for the single-visit chart
    pub samples: Vec<f64>,
}

/// Detail card for one visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitDetail {
    pub date: NaiveDate,

    /// Admission time, `HH:MM`
    pub admitted_at: String,

    /// Discharge time, `HH:MM`
    pub discharged_at: String,

    pub ktas: String,

    /// Length of stay in minutes
    pub duration_minutes: i64,

    pub readings: Vec<MetricReading>,

    pub drugs: Vec<String>,
}

impl VisitDetail {
    /// Reading for `metric`, if present
    pub fn reading(&self, metric: Metric) -> Option<&MetricReading> {
        self.readings.iter().find(|r| r.metric == metric)
    }
}
