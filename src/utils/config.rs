//! Configuration and constants for the library and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Decimal places used when formatting means and deltas for display
pub const DEFAULT_DECIMALS: usize = 1;

/// Upper bound accepted for `--decimals`
pub const MAX_DECIMALS: usize = 6;

// KTAS scale: 1 is the most urgent, 5 the least
pub const KTAS_MIN: u8 = 1;
pub const KTAS_MAX: u8 = 5;

/// Prefix of the triage label as it appears in datasets ("Level 3")
pub const KTAS_LABEL_PREFIX: &str = "Level";

/// Wire format for admission and discharge times
pub const TIME_FORMAT: &str = "%H:%M";
