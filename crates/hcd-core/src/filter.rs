//! Criteria-based record filtering.
//!
//! Every active criterion must pass (logical AND). Region and district
//! criteria test containment in the record's address rather than equality
//! with the classified fields, so a record whose address mentions the
//! selection is found even when classification put it elsewhere.

use std::collections::HashSet;

use hcd_model::{Category, Criteria, KeywordCase, Record, SearchOptions, fold_variants};

use crate::dataset::Dataset;

/// Filter configuration: keyword case policy and optional district-forced
/// keyword matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter<'d> {
    keyword_case: KeywordCase,
    forced_districts: Option<&'d HashSet<String>>,
}

impl<'d> RecordFilter<'d> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    /// When the keyword names one of `districts`, match it against the
    /// address only.
    pub fn with_forced_districts(mut self, districts: &'d HashSet<String>) -> Self {
        self.forced_districts = Some(districts);
        self
    }

    /// Filter configured from search options over `dataset`.
    pub fn from_options(options: &SearchOptions, dataset: &'d Dataset) -> Self {
        let filter = Self::new().with_keyword_case(options.keyword_case);
        if options.force_district_match {
            filter.with_forced_districts(dataset.district_names())
        } else {
            filter
        }
    }

    pub fn matches(&self, record: &Record, criteria: &Criteria) -> bool {
        self.prepare(criteria).matches(record)
    }

    /// Records passing `criteria`, in input order.
    pub fn filter<'r>(&self, records: &'r [Record], criteria: &Criteria) -> Vec<&'r Record> {
        let prepared = self.prepare(criteria);
        let matched: Vec<&Record> = records.iter().filter(|r| prepared.matches(r)).collect();
        tracing::debug!(
            total = records.len(),
            matched = matched.len(),
            keyword_case = self.keyword_case.as_str(),
            "filtered records"
        );
        matched
    }

    fn prepare(&self, criteria: &Criteria) -> PreparedCriteria {
        let keyword = criteria.active_keyword().map(|keyword| {
            let forced = self
                .forced_districts
                .is_some_and(|districts| districts.contains(keyword));
            if forced {
                KeywordMatch::Address(keyword.to_string())
            } else {
                match self.keyword_case {
                    KeywordCase::Sensitive => KeywordMatch::Sensitive(keyword.to_string()),
                    KeywordCase::Insensitive => KeywordMatch::Insensitive(keyword.to_lowercase()),
                }
            }
        });
        PreparedCriteria {
            region: criteria.active_region().map(|r| fold_variants(r.trim())),
            sub_region: criteria.active_sub_region().map(|s| fold_variants(s.trim())),
            keyword,
            category: criteria.category,
        }
    }
}

/// Records from `records` passing `criteria` with the default configuration.
pub fn filter<'r>(records: &'r [Record], criteria: &Criteria) -> Vec<&'r Record> {
    RecordFilter::new().filter(records, criteria)
}

enum KeywordMatch {
    Sensitive(String),
    /// Keyword already lowercased.
    Insensitive(String),
    Address(String),
}

impl KeywordMatch {
    fn matches(&self, record: &Record) -> bool {
        match self {
            KeywordMatch::Sensitive(keyword) => record
                .searchable_fields()
                .iter()
                .any(|field| field.contains(keyword.as_str())),
            KeywordMatch::Insensitive(keyword) => record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(keyword.as_str())),
            KeywordMatch::Address(keyword) => record.address.contains(keyword.as_str()),
        }
    }
}

struct PreparedCriteria {
    region: Option<String>,
    sub_region: Option<String>,
    keyword: Option<KeywordMatch>,
    category: Option<Category>,
}

impl PreparedCriteria {
    fn matches(&self, record: &Record) -> bool {
        self.region
            .as_deref()
            .is_none_or(|region| record.address.contains(region))
            && self
                .sub_region
                .as_deref()
                .is_none_or(|sub| record.address.contains(sub))
            && self
                .keyword
                .as_ref()
                .is_none_or(|keyword| keyword.matches(record))
            && self
                .category
                .is_none_or(|category| category.matches_name(&record.name))
    }
}
