//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod overview;
pub mod utils;

// Re-export main command functions
pub use overview::{execute_overview, validate_args, OverviewArgs};
pub use utils::{display_schema, display_version, execute_demographics, validate_dataset_file};
