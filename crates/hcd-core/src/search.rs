//! One search round: filter, clamp the page, slice.

use serde::Serialize;

use hcd_model::{Record, SearchOptions, SearchState};

use crate::dataset::Dataset;
use crate::filter::RecordFilter;
use crate::paginate::Paginator;

/// Result of a search: totals and the rows of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<'a> {
    pub total: usize,
    /// Page actually shown after clamping.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub rows: Vec<&'a Record>,
}

impl SearchOutcome<'_> {
    /// "共找到 N 筆資料"
    pub fn status_line(&self) -> String {
        format!("共找到 {} 筆資料", self.total)
    }

    /// "第 x / y 頁"; an empty result still reads as page 1 of 1.
    pub fn page_label(&self) -> String {
        format!("第 {} / {} 頁", self.page_index, self.page_count.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }
}

pub fn search<'a>(
    dataset: &'a Dataset,
    state: &SearchState,
    options: &SearchOptions,
) -> SearchOutcome<'a> {
    let filter = RecordFilter::from_options(options, dataset);
    let matched = filter.filter(dataset.records(), &state.criteria());
    let paginator = Paginator::new(options.page_size);
    let page_index = paginator.clamp(state.page_index, matched.len());
    let rows = paginator.page(&matched, page_index).to_vec();
    tracing::debug!(
        total = matched.len(),
        page = page_index,
        rows = rows.len(),
        "search complete"
    );
    SearchOutcome {
        total: matched.len(),
        page_index,
        page_count: paginator.page_count(matched.len()),
        page_size: options.page_size,
        rows,
    }
}
