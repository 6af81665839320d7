//! Directory data ingestion.
//!
//! This crate reads the published institution CSVs and the optional services
//! CSV of a data directory into typed rows.
//!
//! # Features
//!
//! - **CSV Loading**: header-addressed string tables with BOM and padding handling
//! - **Schema Mapping**: per-field header aliases into [`hcd_model::RawRecord`]
//! - **Discovery**: classify CSV files by the agency dataset id in their name
//! - **Manifest**: optional `directory.toml` listing sources and search defaults
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hcd_ingest::load_directory;
//!
//! let loaded = load_directory(Path::new("data"))?;
//! println!("{} rows, {} services", loaded.records.len(), loaded.services.len());
//! ```

mod csv;
mod discovery;
mod error;
mod loader;
mod manifest;
mod paths;
mod schema;
mod services;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{CsvTable, normalize_header, read_csv_table, read_csv_table_from_reader};

// === Schema Mapping ===
pub use schema::{ColumnAliases, ColumnMap, INSTITUTION_SCHEMA, SourceSchema};

// === Services ===
pub use services::{
    SERVICE_METADATA_COLUMNS, SERVICE_NAME_COLUMN, load_services, services_from_table,
};

// === File Discovery ===
pub use discovery::{
    DiscoveredSources, SourceKind, classify_source_file, discover_sources, list_csv_files,
};

// === Configuration ===
pub use manifest::{
    DirectoryManifest, MANIFEST_FILE, ServicesEntry, SourceEntry, find_manifest, load_manifest,
    parse_manifest,
};
pub use paths::{DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR};

// === Loading ===
pub use loader::{LoadedDirectory, SourceReport, load_directory, load_institutions};
