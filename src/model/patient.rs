//! Patients and their visit history.

use super::Visit;
use crate::utils::error::DataError;
use serde::{Deserialize, Serialize};

/// A patient and their visits, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatientRecord", into = "PatientRecord")]
pub struct Patient {
    id: u32,
    name: String,
    visits: Vec<Visit>,
}

impl Patient {
    /// Create a patient
    ///
    /// # Errors
    /// * `DataError::VisitsOutOfOrder` - visits are not sorted by date and admission time
    pub fn new(id: u32, name: impl Into<String>, visits: Vec<Visit>) -> Result<Self, DataError> {
        if let Some(index) = first_out_of_order(&visits) {
            return Err(DataError::VisitsOutOfOrder { patient_id: id, index });
        }

        Ok(Self {
            id,
            name: name.into(),
            visits,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Name and id as shown in the patient picker
    pub fn display_name(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

/// Index of the first visit that starts before its predecessor
fn first_out_of_order(visits: &[Visit]) -> Option<usize> {
    visits
        .windows(2)
        .position(|pair| pair[1].order_key() < pair[0].order_key())
        .map(|i| i + 1)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PatientRecord {
    id: u32,
    name: String,
    #[serde(default)]
    visits: Vec<Visit>,
}

impl TryFrom<PatientRecord> for Patient {
    type Error = DataError;

    fn try_from(record: PatientRecord) -> Result<Self, Self::Error> {
        Patient::new(record.id, record.name, record.visits)
    }
}

impl From<Patient> for PatientRecord {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            visits: patient.visits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriageLevel;
    use chrono::{NaiveDate, NaiveTime};

    fn visit_on(month: u32, day: u32, hour: u32) -> Visit {
        Visit::new(
            NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            TriageLevel::new(3).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_patient_accepts_chronological_visits() {
        let patient = Patient::new(101, "Patient A", vec![visit_on(4, 1, 10), visit_on(5, 15, 9)]).unwrap();
        assert_eq!(patient.visits().len(), 2);
        assert_eq!(patient.display_name(), "Patient A (ID: 101)");
    }

    #[test]
    fn test_patient_accepts_no_visits() {
        let patient = Patient::new(7, "Nobody", Vec::new()).unwrap();
        assert!(patient.visits().is_empty());
    }

    #[test]
    fn test_patient_accepts_same_key() {
        assert!(Patient::new(1, "Twin", vec![visit_on(4, 1, 10), visit_on(4, 1, 10)]).is_ok());
    }

    #[test]
    fn test_patient_rejects_out_of_order_visits() {
        let result = Patient::new(102, "Patient B", vec![visit_on(6, 20, 14), visit_on(4, 2, 12)]);
        match result {
            Err(DataError::VisitsOutOfOrder { patient_id, index }) => {
                assert_eq!(patient_id, 102);
                assert_eq!(index, 1);
            }
            other => panic!("expected VisitsOutOfOrder, got {:?}", other),
        }
    }

    #[test]
    fn test_patient_rejects_same_day_earlier_admission() {
        assert!(Patient::new(1, "A", vec![visit_on(4, 1, 14), visit_on(4, 1, 9)]).is_err());
    }
}
