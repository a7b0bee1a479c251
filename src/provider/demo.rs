//! Built-in demonstration dataset.

use super::DataProvider;
use crate::model::{parse_time, Metric, Patient, TriageLevel, Visit};
use crate::utils::error::DataError;
use chrono::NaiveDate;
use log::debug;

/// Provider serving three fixed demo patients (ids 101, 102, 103)
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for DemoProvider {
    fn patients(&self) -> Result<Vec<Patient>, DataError> {
        let patients = vec![
            Patient::new(
                101,
                "Patient A",
                vec![
                    demo_visit(
                        (2024, 4, 1), "10:30", "13:00", 1,
                        [&[72.0, 75.0, 78.0], &[120.0, 122.0, 124.0], &[80.0, 82.0, 84.0]],
                        &["Drug A", "Drug B"],
                    )?,
                    demo_visit(
                        (2024, 5, 15), "09:00", "11:30", 2,
                        [&[70.0, 73.0, 76.0], &[118.0, 120.0, 122.0], &[78.0, 80.0, 82.0]],
                        &["Drug C"],
                    )?,
                ],
            )?,
            Patient::new(
                102,
                "Patient B",
                vec![
                    demo_visit(
                        (2024, 4, 2), "12:15", "15:00", 2,
                        [&[95.0, 98.0, 100.0], &[150.0, 148.0, 145.0], &[90.0, 88.0, 85.0]],
                        &["Drug D"],
                    )?,
                    demo_visit(
                        (2024, 6, 20), "14:00", "16:45", 3,
                        [&[90.0, 92.0, 95.0], &[140.0, 138.0, 135.0], &[85.0, 83.0, 80.0]],
                        &["Drug E", "Drug F"],
                    )?,
                ],
            )?,
            Patient::new(
                103,
                "Patient C",
                vec![demo_visit(
                    (2024, 4, 3), "14:45", "17:30", 3,
                    [&[88.0, 85.0, 82.0], &[130.0, 128.0, 126.0], &[85.0, 83.0, 81.0]],
                    &["Drug H", "Drug I"],
                )?],
            )?,
        ];

        debug!("Demo dataset loaded: {} patients", patients.len());

        Ok(patients)
    }
}

/// Build one demo visit; `vitals` is HR, SBP, DBP in that order
fn demo_visit(
    (year, month, day): (i32, u32, u32),
    admitted: &str,
    discharged: &str,
    ktas: u8,
    vitals: [&[f64]; 3],
    drugs: &[&str],
) -> Result<Visit, DataError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DataError::InvalidDate(format!("{}-{}-{}", year, month, day)))?;

    let visit = Visit::new(date, parse_time(admitted)?, parse_time(discharged)?, TriageLevel::new(ktas)?)?;

    Ok(Metric::ALL
        .iter()
        .zip(vitals)
        .fold(visit, |visit, (&metric, samples)| visit.with_series(metric, samples.to_vec()))
        .with_drugs(drugs.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let patients = DemoProvider::new().patients().unwrap();

        let ids: Vec<u32> = patients.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![101, 102, 103]);

        let visit_counts: Vec<usize> = patients.iter().map(|p| p.visits().len()).collect();
        assert_eq!(visit_counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_demo_visit_contents() {
        let patients = DemoProvider::new().patients().unwrap();
        let visit = &patients[1].visits()[1];

        assert_eq!(visit.date(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(visit.triage().level(), 3);
        assert_eq!(visit.series(Metric::SystolicBp).samples(), &[140.0, 138.0, 135.0]);
        assert_eq!(visit.drugs(), &["Drug E".to_string(), "Drug F".to_string()]);
        assert_eq!(visit.duration().num_minutes(), 165);
    }
}
