//! `directory.toml`: explicit source list and search defaults for a data
//! directory.
//!
//! ```toml
//! [[sources]]
//! path = "A21030000I-D2000H-001.csv"
//! category = "home-care"
//!
//! [services]
//! path = "services.csv"
//!
//! [search]
//! page_size = 50
//! keyword_case = "sensitive"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hcd_model::{SearchOptions, SourceCategory};

use crate::error::{IngestError, Result};

/// File name looked up in the data directory.
pub const MANIFEST_FILE: &str = "directory.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryManifest {
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    #[serde(default)]
    pub services: Option<ServicesEntry>,
    #[serde(default)]
    pub search: SearchOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Path relative to the data directory.
    pub path: String,
    pub category: SourceCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesEntry {
    pub path: String,
}

impl DirectoryManifest {
    /// Institution sources resolved against `root`.
    pub fn source_paths(&self, root: &Path) -> Vec<(PathBuf, SourceCategory)> {
        self.sources
            .iter()
            .map(|entry| (root.join(&entry.path), entry.category))
            .collect()
    }

    pub fn services_path(&self, root: &Path) -> Option<PathBuf> {
        self.services.as_ref().map(|entry| root.join(&entry.path))
    }
}

/// Returns the manifest path if `dir` contains one.
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    path.is_file().then_some(path)
}

pub fn load_manifest(path: &Path) -> Result<DirectoryManifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::open(path, e))?;
    parse_manifest(&contents, path)
}

pub fn parse_manifest(contents: &str, origin: &Path) -> Result<DirectoryManifest> {
    let manifest: DirectoryManifest =
        toml::from_str(contents).map_err(|source| IngestError::Manifest {
            path: origin.to_path_buf(),
            source,
        })?;
    validate_manifest(&manifest, origin)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &DirectoryManifest, origin: &Path) -> Result<()> {
    if let Some(entry) = manifest.sources.iter().find(|e| e.path.trim().is_empty()) {
        return Err(IngestError::InvalidManifest {
            path: origin.to_path_buf(),
            reason: format!("empty path for {} source", entry.category.as_str()),
        });
    }
    if manifest
        .services
        .as_ref()
        .is_some_and(|entry| entry.path.trim().is_empty())
    {
        return Err(IngestError::InvalidManifest {
            path: origin.to_path_buf(),
            reason: "empty services path".to_string(),
        });
    }
    manifest
        .search
        .validate()
        .map_err(|e| IngestError::InvalidManifest {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
}
