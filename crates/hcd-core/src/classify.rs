//! Address to administrative region classification.
//!
//! Classification runs in two stages:
//!
//! 1. **Region**: prefix match against [`Region::CANONICAL`] in canonical
//!    order. The matched prefix is stripped to give the *remainder*.
//! 2. **Sub-region**: an ordered list of [`SubRegionStrategy`] values is
//!    tried against the remainder; the first strategy that returns a name
//!    wins. The default list holds only [`SuffixPattern`]; datasets add a
//!    [`RoadLookup`](crate::road::RoadLookup) after it.
//!
//! Classification never fails. Anything unmatched resolves to the
//! [`Region::Other`] / [`SubRegion::Other`] sentinels.
//!
//! # Example
//!
//! ```
//! use hcd_core::classify;
//! use hcd_model::Region;
//!
//! let result = classify("臺北市大安區復興南路一段1號");
//! assert_eq!(result.region, Region::Taipei);
//! assert_eq!(result.sub_region.as_str(), "大安區");
//! ```

use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use serde::Serialize;

use hcd_model::{Region, SubRegion, fold_variants};

/// One to three ideographs followed by a district/township/town/city suffix.
static DISTRICT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[一-龥]{1,3}[區鄉鎮市]").expect("Invalid district regex"));

/// Result of classifying one address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub region: Region,
    pub sub_region: SubRegion,
}

impl Classification {
    pub fn into_parts(self) -> (Region, SubRegion) {
        (self.region, self.sub_region)
    }
}

/// Splits a folded address into its region and the text after the region.
///
/// When no region matches, the remainder is the whole address.
pub fn split_region(address: &str) -> (Region, &str) {
    match Region::from_address_prefix(address) {
        Some(region) => (region, &address[region.as_str().len()..]),
        None => (Region::Other, address),
    }
}

/// Byte range of the first district name in `remainder`.
pub fn locate_district(remainder: &str) -> Option<(usize, usize)> {
    DISTRICT_PATTERN
        .find(remainder)
        .map(|found| (found.start(), found.end()))
}

/// A way of deriving a sub-region name from the text after the region.
pub trait SubRegionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the sub-region name, or `None` to defer to the next strategy.
    fn resolve(&self, region: Region, remainder: &str) -> Option<String>;
}

/// Scans the remainder for the first `…區/鄉/鎮/市` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixPattern;

impl SubRegionStrategy for SuffixPattern {
    fn name(&self) -> &'static str {
        "suffix-pattern"
    }

    fn resolve(&self, _region: Region, remainder: &str) -> Option<String> {
        locate_district(remainder).map(|(start, end)| remainder[start..end].to_string())
    }
}

/// Classifies addresses with an ordered, first-success-wins strategy list.
pub struct AddressClassifier {
    strategies: Vec<Box<dyn SubRegionStrategy>>,
}

impl Default for AddressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressClassifier {
    /// Classifier with only the suffix-pattern strategy.
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(SuffixPattern)],
        }
    }

    /// Appends a strategy tried after the existing ones.
    pub fn with_strategy(mut self, strategy: Box<dyn SubRegionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|strategy| strategy.name())
    }

    pub fn classify(&self, address: &str) -> Classification {
        let trimmed = address.trim().trim_start_matches('\u{feff}').trim_start();
        let folded = fold_variants(trimmed);
        let (region, remainder) = split_region(&folded);
        let sub_region = self
            .strategies
            .iter()
            .find_map(|strategy| {
                let resolved = strategy.resolve(region, remainder)?;
                tracing::trace!(strategy = strategy.name(), sub_region = %resolved, "resolved sub-region");
                Some(resolved)
            })
            .map(SubRegion::Named)
            .unwrap_or(SubRegion::Other);
        Classification { region, sub_region }
    }
}

static DEFAULT_CLASSIFIER: OnceLock<AddressClassifier> = OnceLock::new();

/// Classifies `address` with the default (suffix-pattern only) classifier.
pub fn classify(address: &str) -> Classification {
    DEFAULT_CLASSIFIER
        .get_or_init(AddressClassifier::new)
        .classify(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(address: &str) -> (Region, String) {
        let result = classify(address);
        (result.region, result.sub_region.as_str().to_string())
    }

    #[test]
    fn classifies_municipality_district() {
        assert_eq!(
            parts("台北市大安區復興南路一段1號"),
            (Region::Taipei, "大安區".to_string())
        );
    }

    #[test]
    fn folds_variant_before_prefix_match() {
        assert_eq!(
            parts("臺北市中山區中山北路二段"),
            (Region::Taipei, "中山區".to_string())
        );
        assert_eq!(parts("臺東縣臺東市中華路").0, Region::Taitung);
        assert_eq!(parts("臺東縣臺東市中華路").1, "台東市");
    }

    #[test]
    fn county_administered_city_and_township() {
        assert_eq!(
            parts("彰化縣員林市中山路一段"),
            (Region::Changhua, "員林市".to_string())
        );
        assert_eq!(
            parts("屏東縣三地門鄉中正路"),
            (Region::Pingtung, "三地門鄉".to_string())
        );
        assert_eq!(parts("宜蘭縣羅東鎮中正路"), (Region::Yilan, "羅東鎮".to_string()));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        assert_eq!(
            parts("\u{feff}台北市大安區"),
            (Region::Taipei, "大安區".to_string())
        );
        assert_eq!(
            parts(" \u{feff} 臺北市大安區"),
            (Region::Taipei, "大安區".to_string())
        );
    }

    #[test]
    fn hsinchu_city_and_county_do_not_collide() {
        assert_eq!(parts("新竹市東區光復路二段").0, Region::HsinchuCity);
        assert_eq!(
            parts("新竹縣竹北市光明六路"),
            (Region::HsinchuCounty, "竹北市".to_string())
        );
    }

    #[test]
    fn unmatched_parts_resolve_to_sentinels() {
        assert_eq!(parts(""), (Region::Other, "其他".to_string()));
        assert_eq!(parts("123 Main Street"), (Region::Other, "其他".to_string()));
        assert_eq!(parts("台中市"), (Region::Taichung, "其他".to_string()));
    }

    #[test]
    fn other_region_still_scans_whole_address() {
        let result = classify("大安區復興南路一段1號");
        assert_eq!(result.region, Region::Other);
        assert_eq!(result.sub_region.as_str(), "大安區");
    }

    #[test]
    fn split_region_strips_prefix() {
        assert_eq!(split_region("高雄市苓雅區"), (Region::Kaohsiung, "苓雅區"));
        assert_eq!(split_region("苓雅區"), (Region::Other, "苓雅區"));
    }

    #[test]
    fn later_strategies_only_run_when_earlier_fail() {
        struct Fixed;
        impl SubRegionStrategy for Fixed {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn resolve(&self, _region: Region, _remainder: &str) -> Option<String> {
                Some("測試區".to_string())
            }
        }

        let classifier = AddressClassifier::new().with_strategy(Box::new(Fixed));
        assert_eq!(
            classifier.strategy_names().collect::<Vec<_>>(),
            vec!["suffix-pattern", "fixed"]
        );
        assert_eq!(
            classifier.classify("台北市大安區").sub_region.as_str(),
            "大安區"
        );
        assert_eq!(
            classifier.classify("台北市復興南路").sub_region.as_str(),
            "測試區"
        );
    }
}
