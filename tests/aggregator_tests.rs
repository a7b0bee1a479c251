use chrono::{NaiveDate, NaiveTime};
use visit_vitals::aggregator::{
    patient_means, summarize_patient, visit_count, visit_delta, visit_mean,
};
use visit_vitals::model::{Metric, Patient, TriageLevel, Visit};
use visit_vitals::utils::error::AggregateError;

fn visit_with_hr(day: u32, hr: &[f64]) -> Visit {
    Visit::new(
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
        TriageLevel::new(2).unwrap(),
    )
    .unwrap()
    .with_series(Metric::HeartRate, hr.to_vec())
    .with_series(Metric::SystolicBp, vec![120.0, 122.0])
    .with_series(Metric::DiastolicBp, vec![80.0, 82.0])
}

#[test]
fn test_two_visit_scenario() {
    let patient = Patient::new(
        101,
        "Patient A",
        vec![
            visit_with_hr(1, &[72.0, 75.0, 78.0]),
            visit_with_hr(15, &[70.0, 73.0, 76.0]),
        ],
    )
    .unwrap();

    let means = patient_means(patient.visits()).unwrap();
    let first = &patient.visits()[0];

    assert_eq!(means[&Metric::HeartRate], 74.0);
    assert_eq!(visit_mean(first, Metric::HeartRate).unwrap(), 75.0);
    assert_eq!(visit_delta(first, Metric::HeartRate, 74.0).unwrap(), 1.0);
}

#[test]
fn test_single_visit_scenario() {
    let patient = Patient::new(103, "Patient C", vec![visit_with_hr(3, &[88.0, 85.0, 82.0])]).unwrap();

    let means = patient_means(patient.visits()).unwrap();
    let baseline = means[&Metric::HeartRate];

    assert_eq!(baseline, 85.0);
    assert_eq!(visit_delta(&patient.visits()[0], Metric::HeartRate, baseline).unwrap(), 0.0);
}

#[test]
fn test_single_visit_mean_is_sum_over_len() {
    let series: [&[f64]; 4] = [
        &[1.0],
        &[60.0, 61.5],
        &[99.0, 101.0, 97.25, 103.75],
        &[0.5, 0.25, 0.125],
    ];

    for samples in series {
        let visit = visit_with_hr(1, samples);
        let expected = samples.iter().sum::<f64>() / samples.len() as f64;

        let means = patient_means(std::slice::from_ref(&visit)).unwrap();
        assert_eq!(means[&Metric::HeartRate], expected);
    }
}

#[test]
fn test_delta_is_linear_in_baseline() {
    let visit = visit_with_hr(1, &[72.0, 75.0, 78.0]);
    let mean = visit_mean(&visit, Metric::HeartRate).unwrap();

    for baseline in [-10.0, 0.0, 74.0, 75.0, 75.5, 1000.0] {
        assert_eq!(visit_delta(&visit, Metric::HeartRate, baseline).unwrap(), mean - baseline);
    }
}

#[test]
fn test_visit_count_matches_visits() {
    for n in 0..4u32 {
        let visits = (1..=n).map(|day| visit_with_hr(day, &[70.0])).collect();
        let patient = Patient::new(1, "A", visits).unwrap();
        assert_eq!(visit_count(&patient), n as usize);
    }
}

#[test]
fn test_empty_inputs_fail() {
    let err = patient_means(&[]).unwrap_err();
    assert!(err.is_empty_input());

    let empty = visit_with_hr(1, &[]);
    let err = visit_mean(&empty, Metric::HeartRate).unwrap_err();
    assert_eq!(err, AggregateError::NoSamples(Metric::HeartRate));
    assert!(err.is_empty_input());

    let err = patient_means(std::slice::from_ref(&empty)).unwrap_err();
    assert!(err.is_empty_input());
}

#[test]
fn test_summary_deltas_sum_to_zero_for_equal_sized_visits() {
    let patient = Patient::new(
        102,
        "Patient B",
        vec![
            visit_with_hr(2, &[95.0, 98.0, 100.0]),
            visit_with_hr(20, &[90.0, 92.0, 95.0]),
        ],
    )
    .unwrap();

    let summary = summarize_patient(&patient).unwrap();
    let total: f64 = summary
        .visits
        .iter()
        .map(|v| v.metrics[&Metric::HeartRate].delta)
        .sum();

    assert!(total.abs() < 1e-9);
}
