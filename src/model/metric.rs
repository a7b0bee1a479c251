//! Tracked vital-sign metrics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tracked vital-sign metric
///
/// Closed set; each tag maps to exactly one series on a [`Visit`](super::Visit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    HeartRate,
    SystolicBp,
    DiastolicBp,
}

impl Metric {
    /// Every metric, in display order
    pub const ALL: [Metric; 3] = [Metric::HeartRate, Metric::SystolicBp, Metric::DiastolicBp];

    /// Short label used in tables and chart legends
    pub fn label(self) -> &'static str {
        match self {
            Metric::HeartRate => "HR",
            Metric::SystolicBp => "SBP",
            Metric::DiastolicBp => "DBP",
        }
    }

    /// Measurement unit
    pub fn unit(self) -> &'static str {
        match self {
            Metric::HeartRate => "bpm",
            Metric::SystolicBp | Metric::DiastolicBp => "mmHg",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = String;

    /// Accepts the short label ("HR") or the snake_case name ("heart_rate")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hr" | "heart_rate" => Ok(Metric::HeartRate),
            "sbp" | "systolic_bp" => Ok(Metric::SystolicBp),
            "dbp" | "diastolic_bp" => Ok(Metric::DiastolicBp),
            other => Err(format!("unknown metric: {}", other)),
        }
    }
}
