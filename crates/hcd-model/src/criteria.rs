//! Filter criteria and the search session state threaded between calls.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::region::ALL_LABEL;

/// Returns the selection as an active filter value, or `None` when it means
/// "match all" (absent, blank, or the 全部 sentinel).
fn active_selection(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == ALL_LABEL {
        None
    } else {
        Some(trimmed)
    }
}

/// Record filter criteria. Every field is optional and defaults to
/// "match all"; supplied fields are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub keyword: Option<String>,
    pub category: Option<Category>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = Some(sub_region.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn active_region(&self) -> Option<&str> {
        active_selection(self.region.as_deref())
    }

    pub fn active_sub_region(&self) -> Option<&str> {
        active_selection(self.sub_region.as_deref())
    }

    /// The trimmed keyword; whitespace-only keywords are absent.
    pub fn active_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
    }

    pub fn is_match_all(&self) -> bool {
        self.active_region().is_none()
            && self.active_sub_region().is_none()
            && self.active_keyword().is_none()
            && self.category.is_none()
    }
}

/// Current picker selections and page of a search session.
///
/// Transitions return a new state; changing any criterion resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub region: String,
    pub sub_region: String,
    pub keyword: String,
    pub category: Option<Category>,
    pub page_index: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            region: ALL_LABEL.to_string(),
            sub_region: ALL_LABEL.to_string(),
            keyword: String::new(),
            category: None,
            page_index: 1,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting a region also resets the district picker.
    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            sub_region: ALL_LABEL.to_string(),
            page_index: 1,
            ..self.clone()
        }
    }

    pub fn with_sub_region(&self, sub_region: impl Into<String>) -> Self {
        Self {
            sub_region: sub_region.into(),
            page_index: 1,
            ..self.clone()
        }
    }

    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            page_index: 1,
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Option<Category>) -> Self {
        Self {
            category,
            page_index: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page_index: usize) -> Self {
        Self {
            page_index: page_index.max(1),
            ..self.clone()
        }
    }

    /// Moves forward one page, staying on the last page when already there.
    pub fn next_page(&self, page_count: usize) -> Self {
        let last = page_count.max(1);
        self.with_page(self.page_index.saturating_add(1).min(last))
    }

    pub fn previous_page(&self) -> Self {
        self.with_page(self.page_index.saturating_sub(1))
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            region: Some(self.region.clone()),
            sub_region: Some(self.sub_region.clone()),
            keyword: Some(self.keyword.clone()),
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_and_blank_are_inactive() {
        let criteria = Criteria::new()
            .with_region("全部")
            .with_sub_region(" ")
            .with_keyword("   ");
        assert!(criteria.is_match_all());
        assert_eq!(Criteria::new().with_keyword(" 醫院 ").active_keyword(), Some("醫院"));
    }

    #[test]
    fn changing_region_resets_district_and_page() {
        let state = SearchState::new()
            .with_region("台北市")
            .with_sub_region("大安區")
            .with_page(3);
        assert_eq!(state.page_index, 3);

        let next = state.with_region("新北市");
        assert_eq!(next.sub_region, "全部");
        assert_eq!(next.page_index, 1);
        assert_eq!(state.sub_region, "大安區");
    }

    #[test]
    fn page_navigation_stays_in_bounds() {
        let state = SearchState::new();
        assert_eq!(state.previous_page().page_index, 1);
        assert_eq!(state.next_page(2).page_index, 2);
        assert_eq!(state.next_page(2).next_page(2).page_index, 2);
        assert_eq!(state.next_page(0).page_index, 1);
    }

    #[test]
    fn next_page_saturates_at_max_index() {
        let state = SearchState::new().with_page(usize::MAX);
        assert_eq!(state.next_page(usize::MAX).page_index, usize::MAX);
        assert_eq!(state.next_page(3).page_index, 3);
    }

    #[test]
    fn keyword_change_resets_page() {
        let state = SearchState::new().with_page(4).with_keyword("診所");
        assert_eq!(state.page_index, 1);
        assert_eq!(state.criteria().active_keyword(), Some("診所"));
    }
}
