//! Source file discovery for data directories.

use std::path::{Path, PathBuf};

use hcd_model::SourceCategory;

use crate::error::{IngestError, Result};

/// File-stem markers of the published agency datasets.
const SOURCE_MARKERS: &[(&str, SourceCategory)] = &[
    ("D2000H", SourceCategory::HomeCare),
    ("D2000I", SourceCategory::Hospice),
    ("HOME-CARE", SourceCategory::HomeCare),
    ("HOSPICE", SourceCategory::Hospice),
];

/// File stem of the services dataset.
const SERVICES_STEM: &str = "services";

/// What a CSV file in the data directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Institutions(SourceCategory),
    Services,
}

/// CSV files found in a data directory, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredSources {
    pub institutions: Vec<(PathBuf, SourceCategory)>,
    pub services: Option<PathBuf>,
    pub unrecognised: Vec<PathBuf>,
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Classifies a CSV file by its stem.
pub fn classify_source_file(path: &Path) -> Option<SourceKind> {
    let stem = path.file_stem().and_then(|v| v.to_str())?;
    if stem.eq_ignore_ascii_case(SERVICES_STEM) {
        return Some(SourceKind::Services);
    }
    let upper = stem.to_uppercase();
    SOURCE_MARKERS
        .iter()
        .find(|(marker, _)| upper.contains(marker))
        .map(|(_, category)| SourceKind::Institutions(*category))
}

/// Discovers institution and services CSVs in `dir` by file name.
pub fn discover_sources(dir: &Path) -> Result<DiscoveredSources> {
    let mut discovered = DiscoveredSources::default();
    for path in list_csv_files(dir)? {
        match classify_source_file(&path) {
            Some(SourceKind::Institutions(category)) => {
                discovered.institutions.push((path, category));
            }
            Some(SourceKind::Services) if discovered.services.is_none() => {
                discovered.services = Some(path);
            }
            _ => {
                tracing::debug!(path = %path.display(), "skipping unrecognised csv");
                discovered.unrecognised.push(path);
            }
        }
    }
    Ok(discovered)
}
