//! Sources of patient data.
//!
//! The presentation layer receives a [`DataProvider`] instead of reading
//! a process-wide dataset, so the demo data and file-backed data are
//! interchangeable.

pub mod demo;
pub mod json;

use crate::model::Patient;
use crate::utils::error::DataError;

pub use demo::DemoProvider;
pub use json::{load_dataset, parse_dataset, Dataset, JsonFileProvider};

/// Something that yields patients
pub trait DataProvider {
    fn patients(&self) -> Result<Vec<Patient>, DataError>;
}

/// Look up a patient by id
pub fn find_patient(patients: &[Patient], id: u32) -> Option<&Patient> {
    patients.iter().find(|p| p.id() == id)
}
