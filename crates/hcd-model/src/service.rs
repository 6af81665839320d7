//! Service-item flags from the secondary services dataset.

use serde::{Deserialize, Serialize};

/// Cell value meaning "service provided".
pub const PROVIDED_FLAG: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlag {
    pub label: String,
    pub provided: bool,
}

impl ServiceFlag {
    pub fn from_cell(label: impl Into<String>, cell: &str) -> Self {
        Self {
            label: label.into(),
            provided: cell.trim() == PROVIDED_FLAG,
        }
    }
}

/// One row of the services dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Institution name as spelled in the services dataset.
    pub institution_name: String,
    /// Leading metadata columns as `(header, value)` pairs, in column order.
    pub metadata: Vec<(String, String)>,
    /// Service-item flags, in column order.
    pub flags: Vec<ServiceFlag>,
}

impl ServiceRecord {
    /// Institution names in the two datasets are spelled inconsistently, so
    /// the join is containment: this row covers `name` when its own name
    /// contains it.
    pub fn covers(&self, name: &str) -> bool {
        let name = name.trim();
        !name.is_empty() && self.institution_name.contains(name)
    }

    pub fn provided(&self) -> impl Iterator<Item = &ServiceFlag> {
        self.flags.iter().filter(|flag| flag.provided)
    }

    pub fn flag(&self, label: &str) -> Option<&ServiceFlag> {
        self.flags.iter().find(|flag| flag.label == label)
    }
}
