//! Patient-level summary: baselines plus per-visit deltas.

use super::means::{patient_means, visit_mean, MetricMeans};
use crate::model::{Metric, Patient, Visit};
use crate::utils::error::AggregateError;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Mean and delta of one metric for one visit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub mean: f64,

    /// `mean - baseline`, sign preserved
    pub delta: f64,
}

/// Per-visit entry of an [`AggregateSummary`]
#[derive(Debug, Clone, PartialEq)]
pub struct VisitDelta {
    pub date: NaiveDate,

    /// Metrics with samples in this visit; an empty series has no entry
    pub metrics: BTreeMap<Metric, MetricDelta>,
}

impl VisitDelta {
    pub fn get(&self, metric: Metric) -> Option<MetricDelta> {
        self.metrics.get(&metric).copied()
    }
}

/// Derived statistics for one patient
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSummary {
    pub patient_id: u32,

    /// Patient-wide mean per metric
    pub means: MetricMeans,

    /// One entry per visit, in visit order
    pub visits: Vec<VisitDelta>,
}

impl AggregateSummary {
    /// Baseline for `metric`
    pub fn baseline(&self, metric: Metric) -> Option<f64> {
        self.means.get(&metric).copied()
    }
}

/// Summarize a patient's visits against their own means
///
/// **Public** - main entry point for summary building
///
/// A visit with an empty series for some metric still gets an entry,
/// just without that metric.
///
/// # Errors
/// * `AggregateError::NoVisits` - patient has no visits
/// * `AggregateError::NoSamples` - a metric has no samples in any visit
pub fn summarize_patient(patient: &Patient) -> Result<AggregateSummary, AggregateError> {
    let means = patient_means(patient.visits())?;

    let visits: Vec<VisitDelta> = patient
        .visits()
        .iter()
        .map(|visit| visit_deltas(visit, &means))
        .collect();

    debug!("Summarized patient {} ({} visits)", patient.id(), visits.len());

    Ok(AggregateSummary {
        patient_id: patient.id(),
        means,
        visits,
    })
}

/// Mean and delta for every metric of one visit
///
/// Metrics missing from `baselines` or empty in this visit are skipped.
pub fn visit_deltas(visit: &Visit, baselines: &MetricMeans) -> VisitDelta {
    let metrics = baselines
        .iter()
        .filter_map(|(&metric, &baseline)| {
            let mean = visit_mean(visit, metric).ok()?;
            Some((metric, MetricDelta { mean, delta: mean - baseline }))
        })
        .collect();

    VisitDelta {
        date: visit.date(),
        metrics,
    }
}
