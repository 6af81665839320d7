//! Data directory location.
//!
//! The CLI resolves the directory as `--data-dir`, then `HCD_DATA_DIR`, then
//! `data/` relative to the working directory.

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "HCD_DATA_DIR";

/// Directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "data";
