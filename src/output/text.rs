//! Plain-text rendering for the terminal.
//!
//! Means and deltas are rounded here and only here.

use crate::report::{DemographicsRow, MetricReading, PatientReport, VisitDetail};

/// Placeholder for a visit without samples
pub const NO_DATA: &str = "no data";

/// Format a value with its unit, e.g. `75.0 bpm`
pub fn format_reading(value: f64, unit: &str, decimals: usize) -> String {
    format!("{:.*} {}", decimals, value, unit)
}

/// Format a delta with an explicit sign, e.g. `+1.0 bpm` or `-2.5 mmHg`
///
/// A delta that rounds to zero is shown as `+0.0`.
pub fn format_delta(value: f64, unit: &str, decimals: usize) -> String {
    let rounded = format!("{:.*}", decimals, value.abs());
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { '-' } else { '+' };
    format!("{}{} {}", sign, rounded, unit)
}

/// Render the demographics table
pub fn render_demographics(rows: &[DemographicsRow]) -> String {
    let mut lines = Vec::new();

    lines.push("  DEMOGRAPHICS".to_string());
    lines.push(format!("  {:>6} | {:<24} | {:>6}", "ID", "Name", "Visits"));
    lines.push(format!("  {}", "-".repeat(42)));

    for row in rows {
        lines.push(format!("  {:>6} | {:<24} | {:>6}", row.id, row.name, row.visit_count));
    }

    lines.join("\n")
}

/// Render a full patient report
pub fn render_patient_report(report: &PatientReport, decimals: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {} (ID: {})", report.patient_name, report.patient_id));
    lines.push(format!("  Visits: {}", report.visit_count));
    lines.push(String::new());

    lines.push("  PATIENT AVERAGES".to_string());
    for mean in &report.means {
        lines.push(format!(
            "    {:<4} {}",
            mean.metric.label(),
            format_reading(mean.mean, mean.metric.unit(), decimals)
        ));
    }
    lines.push(String::new());

    lines.push("  TIMELINE".to_string());
    for point in &report.timeline {
        lines.push(format!("    {}  KTAS: {}", point.date, point.ktas));
    }

    for trend in &report.trends {
        lines.push(String::new());
        lines.push(format!("  {} TREND ({})", trend.metric.label(), trend.unit));
        for point in &trend.points {
            let value = match point.mean {
                Some(mean) => format!("{:.*}", decimals, mean),
                None => NO_DATA.to_string(),
            };
            lines.push(format!("    {}  {}", point.date, value));
        }
    }

    for visit in &report.visits {
        lines.push(String::new());
        lines.push(render_visit(visit, decimals));
    }

    lines.join("\n")
}

/// Render one visit card
pub fn render_visit(visit: &VisitDetail, decimals: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  VISIT {}", visit.date));
    lines.push(format!(
        "    Admitted: {} | Discharged: {} | KTAS: {} | Stay: {} min",
        visit.admitted_at, visit.discharged_at, visit.ktas, visit.duration_minutes
    ));

    for reading in &visit.readings {
        lines.push(format!("    {:<4} {}", reading.metric.label(), render_reading(reading, decimals)));
    }

    let drugs = if visit.drugs.is_empty() {
        "none".to_string()
    } else {
        visit.drugs.join(", ")
    };
    lines.push(format!("    Drugs: {}", drugs));

    lines.join("\n")
}

fn render_reading(reading: &MetricReading, decimals: usize) -> String {
    match (reading.mean, reading.delta) {
        (Some(mean), Some(delta)) => format!(
            "{:>14} ({})",
            format_reading(mean, &reading.unit, decimals),
            format_delta(delta, &reading.unit, decimals)
        ),
        _ => format!("{:>14}", NO_DATA),
    }
}
