//! Road to district fallback.
//!
//! Addresses that omit the district ("台北市復興南路一段1號") can often be
//! placed by looking at other records on the same road in the same region.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use hcd_model::Region;

use crate::classify::{SubRegionStrategy, locate_district, split_region};

static ROAD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[一-龥]{1,5}(?:路|街|大道)").expect("Invalid road regex"));

/// Road token of a remainder: searched after the district when there is one.
pub fn road_token(remainder: &str) -> Option<&str> {
    let haystack = match locate_district(remainder) {
        Some((_, end)) => &remainder[end..],
        None => remainder,
    };
    ROAD_PATTERN.find(haystack).map(|found| found.as_str())
}

#[derive(Debug, Clone, Default)]
struct DistrictTally {
    // (district, count) in first-seen order
    counts: Vec<(String, usize)>,
}

impl DistrictTally {
    fn record(&mut self, district: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == district) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((district.to_string(), 1)),
        }
    }

    fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.is_none_or(|current| entry.1 > current.1) {
                best = Some(entry);
            }
        }
        best.map(|(name, _)| name.as_str())
    }
}

/// Co-occurrence counts of `(region, road)` and named districts.
#[derive(Debug, Clone, Default)]
pub struct RoadIndex {
    roads: HashMap<(Region, String), DistrictTally>,
}

impl RoadIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from folded addresses and their named districts.
    pub fn from_addresses<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new();
        for (address, district) in entries {
            index.observe(address, district);
        }
        index
    }

    /// Counts `district` against the road found in `address`, if any.
    pub fn observe(&mut self, address: &str, district: &str) {
        let (region, remainder) = split_region(address);
        if let Some(road) = road_token(remainder) {
            self.roads
                .entry((region, road.to_string()))
                .or_default()
                .record(district);
        }
    }

    /// Most frequent district seen on `road` in `region`; ties go to the
    /// district seen first.
    pub fn lookup(&self, region: Region, road: &str) -> Option<&str> {
        self.roads
            .get(&(region, road.to_string()))
            .and_then(DistrictTally::winner)
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

/// Sub-region strategy backed by a [`RoadIndex`].
#[derive(Debug, Clone)]
pub struct RoadLookup {
    index: RoadIndex,
}

impl RoadLookup {
    pub fn new(index: RoadIndex) -> Self {
        Self { index }
    }
}

impl SubRegionStrategy for RoadLookup {
    fn name(&self) -> &'static str {
        "road-lookup"
    }

    fn resolve(&self, region: Region, remainder: &str) -> Option<String> {
        let road = road_token(remainder)?;
        self.index.lookup(region, road).map(str::to_string)
    }
}
