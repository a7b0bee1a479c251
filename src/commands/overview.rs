//! Overview command implementation.
//!
//! The overview command:
//! 1. Loads patients from the provider
//! 2. Finds the requested patient
//! 3. Builds the patient report
//! 4. Narrows it to the requested metrics
//! 5. Prints it and optionally writes JSON

use crate::model::Metric;
use crate::output::{render_patient_report, write_report};
use crate::provider::{find_patient, DataProvider};
use crate::report::{build_patient_report, PatientReport};
use crate::utils::config::{DEFAULT_DECIMALS, MAX_DECIMALS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the overview command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct OverviewArgs {
    /// Patient to report on
    pub patient_id: u32,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Decimal places for printed values
    pub decimals: usize,

    /// Metrics to keep in the report; empty keeps all
    pub metrics: Vec<Metric>,

    /// Print the text report to stdout
    pub print_report: bool,
}

impl Default for OverviewArgs {
    fn default() -> Self {
        Self {
            patient_id: 0,
            output_json: None,
            decimals: DEFAULT_DECIMALS,
            metrics: Vec::new(),
            print_report: true,
        }
    }
}

/// Execute the overview command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset loading failures
/// * Unknown patient id
/// * Empty visit data (no mean can be computed)
/// * File write errors
pub fn execute_overview(provider: &dyn DataProvider, args: &OverviewArgs) -> Result<PatientReport> {
    info!("Starting overview for patient {}", args.patient_id);

    let patients = provider.patients().context("Failed to load patients")?;
    debug!("Provider returned {} patients", patients.len());

    let patient = find_patient(&patients, args.patient_id)
        .with_context(|| format!("Patient {} not found", args.patient_id))?;

    let mut report = build_patient_report(patient)
        .with_context(|| format!("Failed to summarize {}", patient.display_name()))?;

    if !args.metrics.is_empty() {
        debug!("Keeping metrics: {:?}", args.metrics);
        report.retain_metrics(&args.metrics);
    }

    if args.print_report {
        println!("{}", render_patient_report(&report, args.decimals));
    }

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(report)
}

/// Validate overview arguments
///
/// **Public** - can be called before execute_overview for early validation
pub fn validate_args(args: &OverviewArgs) -> Result<()> {
    if args.decimals > MAX_DECIMALS {
        anyhow::bail!("decimals is too large (max {})", MAX_DECIMALS);
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}
