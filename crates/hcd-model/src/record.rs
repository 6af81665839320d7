//! Institution records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::region::{Region, SubRegion};

/// Which published dataset a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceCategory {
    /// Home medical care institutions (居家醫療機構).
    HomeCare,
    /// Hospice care and nursing homes (安寧照護／護理之家).
    Hospice,
}

impl SourceCategory {
    pub const ALL: [SourceCategory; 2] = [SourceCategory::HomeCare, SourceCategory::Hospice];

    /// Display label shown in the source column.
    pub fn label(&self) -> &'static str {
        match self {
            SourceCategory::HomeCare => "居家醫療機構",
            SourceCategory::Hospice => "安寧照護／護理之家",
        }
    }

    /// Short identifier used in manifests and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::HomeCare => "home-care",
            SourceCategory::Hospice => "hospice",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SourceCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SourceCategory::ALL
            .into_iter()
            .find(|source| {
                source.as_str().eq_ignore_ascii_case(trimmed) || source.label() == trimmed
            })
            .ok_or_else(|| ModelError::UnknownSource(s.to_string()))
    }
}

/// A source row after column mapping, before validation and classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub team: Option<String>,
    pub code: Option<String>,
    pub source: Option<SourceCategory>,
}

/// One validated, classified institution entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub team: String,
    pub code: String,
    pub source: SourceCategory,
    pub region: Region,
    pub sub_region: SubRegion,
}

impl Record {
    /// Fields searched by the free-text keyword, in display order.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.name, &self.address, &self.phone, &self.team]
    }
}
