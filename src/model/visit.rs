//! A single hospital visit and its recorded vitals.
//!
//! Visits are validated when they are built, whether in code through
//! [`Visit::new`] or when deserialized from a dataset file.

use super::Metric;
use crate::utils::config::{KTAS_LABEL_PREFIX, KTAS_MAX, KTAS_MIN, TIME_FORMAT};
use crate::utils::error::DataError;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered samples of one metric within one visit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VitalSeries(Vec<f64>);

impl VitalSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Arithmetic mean, `None` for an empty series
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.sum() / self.0.len() as f64)
        }
    }
}

impl From<Vec<f64>> for VitalSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// KTAS triage level, 1 (most urgent) through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriageLevel(u8);

impl TriageLevel {
    pub fn new(level: u8) -> Result<Self, DataError> {
        if (KTAS_MIN..=KTAS_MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DataError::InvalidTriage(level.to_string()))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Label as shown on the dashboard ("Level 2")
    pub fn label(self) -> String {
        format!("{} {}", KTAS_LABEL_PREFIX, self.0)
    }

    /// Parse "Level 2" or a bare "2"
    pub fn parse(s: &str) -> Result<Self, DataError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(KTAS_LABEL_PREFIX)
            .map(str::trim)
            .unwrap_or(trimmed);

        let level: u8 = digits
            .parse()
            .map_err(|_| DataError::InvalidTriage(s.to_string()))?;

        Self::new(level).map_err(|_| DataError::InvalidTriage(s.to_string()))
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", KTAS_LABEL_PREFIX, self.0)
    }
}

impl TryFrom<String> for TriageLevel {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TriageLevel> for String {
    fn from(level: TriageLevel) -> Self {
        level.label()
    }
}

/// One hospital encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VisitRecord", into = "VisitRecord")]
pub struct Visit {
    date: NaiveDate,
    admitted_at: NaiveTime,
    discharged_at: NaiveTime,
    triage: TriageLevel,
    heart_rate: VitalSeries,
    systolic_bp: VitalSeries,
    diastolic_bp: VitalSeries,
    drugs: Vec<String>,
}

impl Visit {
    /// Create a visit with empty series and no drugs
    ///
    /// # Errors
    /// * `DataError::DischargeBeforeAdmission` - discharge time precedes admission
    pub fn new(
        date: NaiveDate,
        admitted_at: NaiveTime,
        discharged_at: NaiveTime,
        triage: TriageLevel,
    ) -> Result<Self, DataError> {
        if discharged_at < admitted_at {
            return Err(DataError::DischargeBeforeAdmission {
                date,
                admitted: admitted_at,
                discharged: discharged_at,
            });
        }

        Ok(Self {
            date,
            admitted_at,
            discharged_at,
            triage,
            heart_rate: VitalSeries::default(),
            systolic_bp: VitalSeries::default(),
            diastolic_bp: VitalSeries::default(),
            drugs: Vec::new(),
        })
    }

    /// Replace the series recorded for `metric`
    pub fn with_series(mut self, metric: Metric, samples: impl Into<VitalSeries>) -> Self {
        *self.series_mut(metric) = samples.into();
        self
    }

    pub fn with_drugs<I, S>(mut self, drugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drugs = drugs.into_iter().map(Into::into).collect();
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn admitted_at(&self) -> NaiveTime {
        self.admitted_at
    }

    pub fn discharged_at(&self) -> NaiveTime {
        self.discharged_at
    }

    pub fn triage(&self) -> TriageLevel {
        self.triage
    }

    pub fn drugs(&self) -> &[String] {
        &self.drugs
    }

    /// Series recorded for `metric`
    pub fn series(&self, metric: Metric) -> &VitalSeries {
        match metric {
            Metric::HeartRate => &self.heart_rate,
            Metric::SystolicBp => &self.systolic_bp,
            Metric::DiastolicBp => &self.diastolic_bp,
        }
    }

    fn series_mut(&mut self, metric: Metric) -> &mut VitalSeries {
        match metric {
            Metric::HeartRate => &mut self.heart_rate,
            Metric::SystolicBp => &mut self.systolic_bp,
            Metric::DiastolicBp => &mut self.diastolic_bp,
        }
    }

    /// Length of stay
    pub fn duration(&self) -> Duration {
        self.discharged_at.signed_duration_since(self.admitted_at)
    }

    /// Key used to check chronological order
    pub(crate) fn order_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.admitted_at)
    }
}

/// Dataset wire format for a visit
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VisitRecord {
    date: NaiveDate,
    #[serde(with = "hhmm")]
    admitted_at: NaiveTime,
    #[serde(with = "hhmm")]
    discharged_at: NaiveTime,
    ktas: TriageLevel,
    #[serde(default, alias = "HR")]
    hr: VitalSeries,
    #[serde(default, alias = "SBP")]
    sbp: VitalSeries,
    #[serde(default, alias = "DBP")]
    dbp: VitalSeries,
    #[serde(default, alias = "DRUG")]
    drugs: Vec<String>,
}

impl TryFrom<VisitRecord> for Visit {
    type Error = DataError;

    fn try_from(record: VisitRecord) -> Result<Self, Self::Error> {
        Ok(Visit::new(record.date, record.admitted_at, record.discharged_at, record.ktas)?
            .with_series(Metric::HeartRate, record.hr)
            .with_series(Metric::SystolicBp, record.sbp)
            .with_series(Metric::DiastolicBp, record.dbp)
            .with_drugs(record.drugs))
    }
}

impl From<Visit> for VisitRecord {
    fn from(visit: Visit) -> Self {
        Self {
            date: visit.date,
            admitted_at: visit.admitted_at,
            discharged_at: visit.discharged_at,
            ktas: visit.triage,
            hr: visit.heart_rate,
            sbp: visit.systolic_bp,
            dbp: visit.diastolic_bp,
            drugs: visit.drugs,
        }
    }
}

/// Parse an `HH:MM` time
pub fn parse_time(s: &str) -> Result<NaiveTime, DataError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| DataError::InvalidTime(s.to_string()))
}

/// Serde adapter for `HH:MM` times
pub(crate) mod hhmm {
    use crate::utils::config::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
