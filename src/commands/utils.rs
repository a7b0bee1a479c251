use crate::output::render_demographics;
use crate::provider::{load_dataset, DataProvider};
use crate::report::{demographics, DemographicsRow};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Print the demographics table
pub fn execute_demographics(provider: &dyn DataProvider) -> Result<Vec<DemographicsRow>> {
    let patients = provider.patients().context("Failed to load patients")?;
    let rows = demographics(&patients);

    println!("{}", render_demographics(&rows));

    Ok(rows)
}

/// Validate a dataset JSON file
pub fn validate_dataset_file(file_path: &Path) -> Result<()> {
    println!("Validating dataset: {}", file_path.display());

    let dataset = load_dataset(file_path)
        .with_context(|| format!("Invalid dataset {}", file_path.display()))?;

    let visits: usize = dataset.patients.iter().map(|p| p.visits().len()).sum();

    println!("✓ Valid dataset JSON");
    println!("  Patients: {}", dataset.patients.len());
    println!("  Visits: {}", visits);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Visit Vitals Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  patient_id: number       - Patient identifier");
        println!("  patient_name: string     - Display name");
        println!("  visit_count: number      - Number of visits");
        println!("  means: array             - Patient-wide mean per metric");
        println!("    metric: string         - heart_rate | systolic_bp | diastolic_bp");
        println!("    mean: number           - Mean over all samples");
        println!("  timeline: array          - Visit date and KTAS label");
        println!("  trends: array            - Per-visit means keyed by date");
        println!("  visits: array            - Visit detail cards");
        println!("    readings: array        - Mean, signed delta (null without samples) and samples");
        println!("    drugs: array           - Administered drugs");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Visit Vitals v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Vital-sign aggregation for patient visit dashboards.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DemoProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_execute_demographics() {
        let rows = execute_demographics(&DemoProvider::new()).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_validate_dataset_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"patients": [{"id": 1, "name": "A", "visits": []}]}"#).unwrap();

        assert!(validate_dataset_file(file.path()).is_ok());
    }

    #[test]
    fn test_validate_dataset_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"patients\": 5}").unwrap();

        assert!(validate_dataset_file(file.path()).is_err());
    }
}
