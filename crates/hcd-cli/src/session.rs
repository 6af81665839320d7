//! Loading a data directory into a searchable session.
//!
//! Search options resolve with the precedence command-line flag, then
//! `directory.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use hcd_core::{Dataset, ServiceDirectory};
use hcd_ingest::{SourceReport, load_directory};
use hcd_model::{KeywordCase, SearchOptions};

/// Search options given on the command line; `None` defers to the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub page_size: Option<usize>,
    pub keyword_case: Option<KeywordCase>,
    pub force_district_match: Option<bool>,
}

impl OptionOverrides {
    pub fn apply(&self, options: SearchOptions) -> SearchOptions {
        let mut options = options;
        if let Some(page_size) = self.page_size {
            options = options.with_page_size(page_size);
        }
        if let Some(keyword_case) = self.keyword_case {
            options = options.with_keyword_case(keyword_case);
        }
        if let Some(force) = self.force_district_match {
            options = options.with_force_district_match(force);
        }
        options
    }
}

/// A loaded, classified data directory.
#[derive(Debug)]
pub struct Session {
    pub data_dir: PathBuf,
    pub manifest: Option<PathBuf>,
    pub dataset: Dataset,
    pub services: ServiceDirectory,
    pub options: SearchOptions,
    pub reports: Vec<SourceReport>,
}

impl Session {
    pub fn open(data_dir: &Path, overrides: &OptionOverrides) -> Result<Self> {
        let loaded = load_directory(data_dir)
            .with_context(|| format!("load data directory {}", data_dir.display()))?;
        let options = overrides.apply(loaded.options);
        options.validate().context("invalid search options")?;

        let raw_rows = loaded.records.len();
        let dataset = Dataset::build(loaded.records, &options);
        tracing::info!(
            data_dir = %data_dir.display(),
            raw_rows,
            records = dataset.len(),
            services = loaded.services.len(),
            "opened directory"
        );

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            manifest: loaded.manifest,
            dataset,
            services: ServiceDirectory::new(loaded.services),
            options,
            reports: loaded.reports,
        })
    }
}
