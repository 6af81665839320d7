//! Coarse institution-type buckets derived from name keywords.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Hospital,
    Clinic,
    NursingHome,
}

/// Static keyword table. A name belongs to a category when it contains any
/// of the category's keywords.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Hospital, &["醫院"]),
    (Category::Clinic, &["診所", "衛生所"]),
    (Category::NursingHome, &["護理之家", "養護"]),
];

impl Category {
    pub const ALL: [Category; 3] = [Category::Hospital, Category::Clinic, Category::NursingHome];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::Clinic => "clinic",
            Category::NursingHome => "nursing-home",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Hospital => "醫院",
            Category::Clinic => "診所",
            Category::NursingHome => "護理之家",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Returns true if `name` contains any keyword of this category.
    pub fn matches_name(&self, name: &str) -> bool {
        self.keywords().iter().any(|keyword| name.contains(keyword))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized || category.label() == normalized)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
