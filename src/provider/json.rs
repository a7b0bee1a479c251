//! Dataset files in JSON.
//!
//! Expected layout:
//!
//! ```json
//! {
//!   "patients": [
//!     {
//!       "id": 101,
//!       "name": "Patient A",
//!       "visits": [
//!         {
//!           "date": "2024-04-01",
//!           "admitted_at": "10:30",
//!           "discharged_at": "13:00",
//!           "ktas": "Level 1",
//!           "hr": [72, 75, 78],
//!           "sbp": [120, 122, 124],
//!           "dbp": [80, 82, 84],
//!           "drugs": ["Drug A", "Drug B"]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Records go through the same validation as visits built in code, and
//! patient ids must be unique within a file.

use super::DataProvider;
use crate::model::Patient;
use crate::utils::error::DataError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Top-level dataset document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DatasetRecord")]
pub struct Dataset {
    pub patients: Vec<Patient>,
}

impl Dataset {
    /// Create a dataset
    ///
    /// # Errors
    /// * `DataError::DuplicatePatient` - two patients share an id
    pub fn new(patients: Vec<Patient>) -> Result<Self, DataError> {
        let mut seen = HashSet::new();
        if let Some(dup) = patients.iter().find(|p| !seen.insert(p.id())) {
            return Err(DataError::DuplicatePatient(dup.id()));
        }

        Ok(Self { patients })
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    patients: Vec<Patient>,
}

impl TryFrom<DatasetRecord> for Dataset {
    type Error = DataError;

    fn try_from(record: DatasetRecord) -> Result<Self, Self::Error> {
        Dataset::new(record.patients)
    }
}

/// Provider reading patients from a JSON file on every call
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for JsonFileProvider {
    fn patients(&self) -> Result<Vec<Patient>, DataError> {
        Ok(load_dataset(&self.path)?.patients)
    }
}

/// Read and validate a dataset file
///
/// **Public** - used by the provider and the `validate` command
///
/// # Errors
/// * `DataError::ReadFailed` - file cannot be opened
/// * `DataError::JsonError` - malformed JSON or a record failing validation
/// * `DataError::DuplicatePatient` - two patients share an id
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();

    debug!("Reading dataset from: {}", path.display());

    let file = File::open(path)?;
    let dataset = parse_dataset(BufReader::new(file))?;

    info!("Loaded {} patients from {}", dataset.patients.len(), path.display());

    Ok(dataset)
}

/// Parse a dataset from any reader
///
/// # Errors
/// * `DataError::JsonError` - malformed JSON or an invalid visit record
/// * `DataError::DuplicatePatient` - two patients share an id
pub fn parse_dataset(reader: impl std::io::Read) -> Result<Dataset, DataError> {
    let record: DatasetRecord = serde_json::from_reader(reader)?;
    Dataset::try_from(record)
}
