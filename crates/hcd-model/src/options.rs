//! Configuration options for searching the directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Rows per page in the result table.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Maximum number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Case policy for free-text keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// Compare keyword and fields as-is.
    #[default]
    Sensitive,
    /// Lowercase both sides before comparing.
    Insensitive,
}

impl KeywordCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCase::Sensitive => "sensitive",
            KeywordCase::Insensitive => "insensitive",
        }
    }
}

impl fmt::Display for KeywordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeywordCase {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sensitive" => Ok(KeywordCase::Sensitive),
            "insensitive" => Ok(KeywordCase::Insensitive),
            _ => Err(ModelError::UnknownKeywordCase(s.to_string())),
        }
    }
}

/// Options controlling dataset construction and searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Rows per page.
    pub page_size: usize,

    /// Case policy for keyword matching.
    pub keyword_case: KeywordCase,

    /// When the keyword is itself a known district name, require the
    /// address to contain it instead of matching any searchable field.
    pub force_district_match: bool,

    /// Resolve missing districts from the road → district index built over
    /// the whole dataset.
    pub road_fallback: bool,

    /// Maximum number of name suggestions.
    pub suggestion_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            keyword_case: KeywordCase::default(),
            force_district_match: false,
            road_fallback: true,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    pub fn with_force_district_match(mut self, enable: bool) -> Self {
        self.force_district_match = enable;
        self
    }

    pub fn with_road_fallback(mut self, enable: bool) -> Self {
        self.road_fallback = enable;
        self
    }

    /// Rejects settings that would make paging meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ModelError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_directory_page() {
        let options = SearchOptions::default();
        assert_eq!(options.page_size, 50);
        assert_eq!(options.keyword_case, KeywordCase::Sensitive);
        assert!(!options.force_district_match);
        assert!(options.road_fallback);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let options = SearchOptions::new().with_page_size(0);
        assert_eq!(options.validate(), Err(ModelError::InvalidPageSize(0)));
    }

    #[test]
    fn keyword_case_parses() {
        assert_eq!(
            "Insensitive".parse::<KeywordCase>().unwrap(),
            KeywordCase::Insensitive
        );
        assert!("loose".parse::<KeywordCase>().is_err());
    }
}
