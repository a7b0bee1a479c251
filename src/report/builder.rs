//! Turn patients and aggregates into dashboard structures.
//!
//! Everything here is read off an [`AggregateSummary`]; nothing is
//! recomputed or rounded. Formatting is done by [`crate::output::text`].
//!
//! A visit with an empty series still gets its card and trend point,
//! with the value left as `None` for the renderer to mark.

use super::schema::{
    DemographicsRow, MetricMean, MetricReading, MetricTrend, PatientReport, TimelinePoint,
    TrendPoint, VisitDetail,
};
use crate::aggregator::{summarize_patient, visit_count, AggregateSummary, VisitDelta};
use crate::model::{Metric, Patient, Visit};
use crate::utils::config::{SCHEMA_VERSION, TIME_FORMAT};
use crate::utils::error::AggregateError;
use chrono::Utc;
use log::{debug, info, warn};

/// Demographics table: one row per patient
pub fn demographics(patients: &[Patient]) -> Vec<DemographicsRow> {
    patients
        .iter()
        .map(|patient| DemographicsRow {
            id: patient.id(),
            name: patient.name().to_string(),
            visit_count: visit_count(patient),
        })
        .collect()
}

/// Visit timeline with KTAS labels
///
/// Visits are already chronological by construction; the sort keeps the
/// output ordered even if that ever changes.
pub fn timeline(patient: &Patient) -> Vec<TimelinePoint> {
    let mut visits: Vec<&Visit> = patient.visits().iter().collect();
    visits.sort_by_key(|v| (v.date(), v.admitted_at()));

    visits
        .into_iter()
        .map(|visit| TimelinePoint {
            date: visit.date(),
            ktas: visit.triage().label(),
        })
        .collect()
}

/// Per-visit mean of `metric`, keyed by visit date
pub fn metric_trend(summary: &AggregateSummary, metric: Metric) -> MetricTrend {
    let points = summary
        .visits
        .iter()
        .map(|visit| TrendPoint {
            date: visit.date,
            mean: visit.get(metric).map(|d| d.mean),
        })
        .collect();

    MetricTrend {
        metric,
        unit: metric.unit().to_string(),
        points,
    }
}

/// Detail card for one visit from its summary entry
pub fn visit_detail(visit: &Visit, deltas: &VisitDelta) -> VisitDetail {
    let readings = Metric::ALL
        .iter()
        .map(|&metric| {
            let reading = deltas.get(metric);
            MetricReading {
                metric,
                unit: metric.unit().to_string(),
                mean: reading.map(|d| d.mean),
                delta: reading.map(|d| d.delta),
                samples: visit.series(metric).samples().to_vec(),
            }
        })
        .collect();

    VisitDetail {
        date: visit.date(),
        admitted_at: visit.admitted_at().format(TIME_FORMAT).to_string(),
        discharged_at: visit.discharged_at().format(TIME_FORMAT).to_string(),
        ktas: visit.triage().label(),
        duration_minutes: visit.duration().num_minutes(),
        readings,
        drugs: visit.drugs().to_vec(),
    }
}

/// Build the full dashboard report for one patient
///
/// **Public** - main entry point for report generation
///
/// # Errors
/// * `AggregateError::NoVisits` - patient has no visits
/// * `AggregateError::NoSamples` - a metric has no samples in any visit
pub fn build_patient_report(patient: &Patient) -> Result<PatientReport, AggregateError> {
    info!("Building report for {}", patient.display_name());

    let summary = summarize_patient(patient)?;

    let means = summary
        .means
        .iter()
        .map(|(&metric, &mean)| MetricMean { metric, mean })
        .collect();

    let trends = Metric::ALL
        .iter()
        .map(|&metric| metric_trend(&summary, metric))
        .collect();

    let details: Vec<VisitDetail> = patient
        .visits()
        .iter()
        .zip(&summary.visits)
        .map(|(visit, deltas)| visit_detail(visit, deltas))
        .collect();

    let gaps = details
        .iter()
        .flat_map(|d| &d.readings)
        .filter(|r| r.mean.is_none())
        .count();
    if gaps > 0 {
        warn!("Patient {}: {} visit readings have no samples", patient.id(), gaps);
    }

    debug!("Report for patient {}: {} visit cards", patient.id(), details.len());

    Ok(PatientReport {
        version: SCHEMA_VERSION.to_string(),
        patient_id: patient.id(),
        patient_name: patient.name().to_string(),
        visit_count: visit_count(patient),
        means,
        timeline: timeline(patient),
        trends,
        visits: details,
        generated_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriageLevel;
    use crate::provider::{DataProvider, DemoProvider};
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn demo() -> Vec<Patient> {
        DemoProvider::new().patients().unwrap()
    }

    fn visit(day: u32, dbp: Vec<f64>) -> Visit {
        Visit::new(
            NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            TriageLevel::new(day as u8).unwrap(),
        )
        .unwrap()
        .with_series(Metric::HeartRate, vec![70.0])
        .with_series(Metric::SystolicBp, vec![120.0])
        .with_series(Metric::DiastolicBp, dbp)
    }

    #[test]
    fn test_demographics() {
        let rows = demographics(&demo());

        assert_eq!(
            rows,
            vec![
                DemographicsRow { id: 101, name: "Patient A".to_string(), visit_count: 2 },
                DemographicsRow { id: 102, name: "Patient B".to_string(), visit_count: 2 },
                DemographicsRow { id: 103, name: "Patient C".to_string(), visit_count: 1 },
            ]
        );
    }

    #[test]
    fn test_timeline() {
        let patients = demo();
        let points = timeline(&patients[1]);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].ktas, "Level 2");
        assert_eq!(points[1].ktas, "Level 3");
        assert!(points[0].date < points[1].date);
    }

    #[test]
    fn test_metric_trend() {
        let patients = demo();
        let summary = summarize_patient(&patients[0]).unwrap();
        let trend = metric_trend(&summary, Metric::HeartRate);

        assert_eq!(trend.unit, "bpm");
        let means: Vec<Option<f64>> = trend.points.iter().map(|p| p.mean).collect();
        assert_eq!(means, vec![Some(75.0), Some(73.0)]);
    }

    #[test]
    fn test_visit_detail() {
        let patients = demo();
        let patient = &patients[0];
        let summary = summarize_patient(patient).unwrap();

        let detail = visit_detail(&patient.visits()[0], &summary.visits[0]);

        assert_eq!(detail.admitted_at, "10:30");
        assert_eq!(detail.discharged_at, "13:00");
        assert_eq!(detail.ktas, "Level 1");
        assert_eq!(detail.duration_minutes, 150);
        assert_eq!(detail.drugs, vec!["Drug A".to_string(), "Drug B".to_string()]);

        let hr = detail.reading(Metric::HeartRate).unwrap();
        assert_eq!(hr.mean, Some(75.0));
        assert_eq!(hr.delta, Some(1.0));
        assert_eq!(hr.samples, vec![72.0, 75.0, 78.0]);

        let sbp = detail.reading(Metric::SystolicBp).unwrap();
        assert_eq!(sbp.delta, Some(1.0));
    }

    #[test]
    fn test_build_patient_report() {
        let patients = demo();
        let report = build_patient_report(&patients[2]).unwrap();

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.patient_id, 103);
        assert_eq!(report.visit_count, 1);
        assert_eq!(report.mean(Metric::HeartRate), Some(85.0));
        assert_eq!(report.trends.len(), 3);
        assert_eq!(report.visits[0].reading(Metric::HeartRate).unwrap().delta, Some(0.0));
    }

    #[test]
    fn test_build_report_with_one_empty_series() {
        let patient = Patient::new(7, "Gap", vec![visit(1, vec![80.0]), visit(2, vec![])]).unwrap();

        let report = build_patient_report(&patient).unwrap();

        assert_eq!(report.timeline.len(), 2);
        assert_eq!(report.visits.len(), 2);
        assert_eq!(report.mean(Metric::DiastolicBp), Some(80.0));

        let first = report.visits[0].reading(Metric::DiastolicBp).unwrap();
        assert_eq!(first.delta, Some(0.0));

        let second = report.visits[1].reading(Metric::DiastolicBp).unwrap();
        assert_eq!(second.mean, None);
        assert_eq!(second.delta, None);
        assert!(second.samples.is_empty());
        assert_eq!(report.visits[1].reading(Metric::HeartRate).unwrap().mean, Some(70.0));

        let dbp_trend = report.trend(Metric::DiastolicBp).unwrap();
        let means: Vec<Option<f64>> = dbp_trend.points.iter().map(|p| p.mean).collect();
        assert_eq!(means, vec![Some(80.0), None]);
    }

    #[test]
    fn test_build_report_metric_missing_everywhere() {
        let patient = Patient::new(8, "No DBP", vec![visit(1, vec![]), visit(2, vec![])]).unwrap();
        assert_eq!(
            build_patient_report(&patient),
            Err(AggregateError::NoSamples(Metric::DiastolicBp))
        );
    }

    #[test]
    fn test_build_report_without_visits() {
        let patient = Patient::new(9, "Empty", Vec::new()).unwrap();
        assert_eq!(build_patient_report(&patient), Err(AggregateError::NoVisits));
    }

    #[test]
    fn test_retain_metrics() {
        let patients = demo();
        let mut report = build_patient_report(&patients[0]).unwrap();

        report.retain_metrics(&[Metric::HeartRate]);

        assert_eq!(report.means.len(), 1);
        assert_eq!(report.trends.len(), 1);
        assert!(report.trend(Metric::SystolicBp).is_none());
        assert!(report.visits.iter().all(|v| v.readings.len() == 1));

        report.retain_metrics(&[]);
        assert_eq!(report.means.len(), 1);
    }
}
