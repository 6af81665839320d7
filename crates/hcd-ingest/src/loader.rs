//! Loading every source of a data directory.
//!
//! A source that fails to load is logged and contributes no rows; the
//! remaining sources still load. Only an unreadable directory or a broken
//! manifest aborts the load.

use std::path::{Path, PathBuf};

use hcd_model::{RawRecord, SearchOptions, ServiceRecord, SourceCategory};

use crate::csv::read_csv_table;
use crate::discovery::discover_sources;
use crate::error::{IngestError, Result};
use crate::manifest::{find_manifest, load_manifest};
use crate::schema::INSTITUTION_SCHEMA;
use crate::services::load_services;

/// Outcome of loading one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub path: PathBuf,
    /// `None` for the services dataset.
    pub category: Option<SourceCategory>,
    pub rows: usize,
    pub error: Option<String>,
}

impl SourceReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything read from a data directory.
#[derive(Debug, Clone, Default)]
pub struct LoadedDirectory {
    pub records: Vec<RawRecord>,
    pub services: Vec<ServiceRecord>,
    /// Search defaults from the manifest, or built-in defaults.
    pub options: SearchOptions,
    pub manifest: Option<PathBuf>,
    pub reports: Vec<SourceReport>,
}

impl LoadedDirectory {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.reports.iter().filter(|report| !report.is_ok())
    }
}

/// Reads one institution CSV and maps it through the institution schema.
pub fn load_institutions(path: &Path, category: SourceCategory) -> Result<Vec<RawRecord>> {
    let table = read_csv_table(path)?;
    INSTITUTION_SCHEMA.map_table(&table, category, path)
}

/// Loads the manifest (or discovered files) of `dir` and every source it names.
pub fn load_directory(dir: &Path) -> Result<LoadedDirectory> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut loaded = LoadedDirectory::default();
    let (sources, services_path) = match find_manifest(dir) {
        Some(manifest_path) => {
            let manifest = load_manifest(&manifest_path)?;
            tracing::debug!(path = %manifest_path.display(), "using manifest");
            let sources = manifest.source_paths(dir);
            let services = manifest.services_path(dir);
            loaded.options = manifest.search;
            loaded.manifest = Some(manifest_path);
            (sources, services)
        }
        None => {
            let discovered = discover_sources(dir)?;
            (discovered.institutions, discovered.services)
        }
    };

    if sources.is_empty() {
        tracing::warn!(dir = %dir.display(), "no institution sources found");
    }

    for (path, category) in sources {
        match load_institutions(&path, category) {
            Ok(records) => {
                tracing::info!(
                    path = %path.display(),
                    source = category.as_str(),
                    rows = records.len(),
                    "loaded source"
                );
                loaded.reports.push(SourceReport {
                    path,
                    category: Some(category),
                    rows: records.len(),
                    error: None,
                });
                loaded.records.extend(records);
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    source = category.as_str(),
                    %error,
                    "failed to load source"
                );
                loaded.reports.push(SourceReport {
                    path,
                    category: Some(category),
                    rows: 0,
                    error: Some(error.to_string()),
                });
            }
        }
    }

    if let Some(path) = services_path {
        match load_services(&path) {
            Ok(services) => {
                loaded.reports.push(SourceReport {
                    path,
                    category: None,
                    rows: services.len(),
                    error: None,
                });
                loaded.services = services;
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to load services");
                loaded.reports.push(SourceReport {
                    path,
                    category: None,
                    rows: 0,
                    error: Some(error.to_string()),
                });
            }
        }
    }

    Ok(loaded)
}
