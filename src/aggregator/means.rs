//! Per-metric means over visits.
//!
//! All functions are pure: they read the visits they are given and
//! return fresh values. No rounding happens here; display formatting
//! belongs to the caller.

use crate::model::{Metric, Patient, Visit};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::BTreeMap;

/// Mean value per metric
pub type MetricMeans = BTreeMap<Metric, f64>;

/// Mean of every metric across all samples of all `visits`
///
/// **Public** - main entry point for patient-wide baselines
///
/// Samples are flattened before averaging, so a visit with more samples
/// weighs more than one with fewer.
///
/// # Errors
/// * `AggregateError::NoVisits` - `visits` is empty
/// * `AggregateError::NoSamples` - a metric has no samples in any visit
pub fn patient_means(visits: &[Visit]) -> Result<MetricMeans, AggregateError> {
    if visits.is_empty() {
        return Err(AggregateError::NoVisits);
    }

    debug!("Computing patient means over {} visits", visits.len());

    Metric::ALL
        .iter()
        .map(|&metric| flattened_mean(visits, metric).map(|mean| (metric, mean)))
        .collect()
}

/// Mean of all samples of `metric` across `visits`
fn flattened_mean(visits: &[Visit], metric: Metric) -> Result<f64, AggregateError> {
    let (sum, count) = visits
        .iter()
        .map(|visit| visit.series(metric))
        .fold((0.0, 0usize), |(sum, count), series| {
            (sum + series.sum(), count + series.len())
        });

    if count == 0 {
        return Err(AggregateError::NoSamples(metric));
    }

    Ok(sum / count as f64)
}

/// Mean of one metric within one visit
///
/// # Errors
/// * `AggregateError::NoSamples` - the series is empty
pub fn visit_mean(visit: &Visit, metric: Metric) -> Result<f64, AggregateError> {
    visit
        .series(metric)
        .mean()
        .ok_or(AggregateError::NoSamples(metric))
}

/// Difference between a visit's mean and `baseline`
///
/// Positive when the visit ran above the baseline, negative below.
pub fn visit_delta(visit: &Visit, metric: Metric, baseline: f64) -> Result<f64, AggregateError> {
    Ok(visit_mean(visit, metric)? - baseline)
}

/// Number of visits on record for a patient
pub fn visit_count(patient: &Patient) -> usize {
    patient.visits().len()
}
