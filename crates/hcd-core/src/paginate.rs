//! Fixed-size, 1-based pagination over slices.

use hcd_model::DEFAULT_PAGE_SIZE;

/// Number of pages needed for `len` items; zero when `len` or `page_size`
/// is zero.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamps `page_index` into `[1, max(1, page_count)]`.
pub fn clamp_page(page_index: usize, len: usize, page_size: usize) -> usize {
    page_index.clamp(1, page_count(len, page_size).max(1))
}

/// Items of 1-based page `page_index`. Out-of-range pages and a zero page
/// size yield an empty slice.
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_size == 0 || page_index == 0 {
        return &[];
    }
    let Some(start) = (page_index - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page<'a, T>(&self, items: &'a [T], page_index: usize) -> &'a [T] {
        page(items, page_index, self.page_size)
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    pub fn clamp(&self, page_index: usize, len: usize) -> usize {
        clamp_page(page_index, len, self.page_size)
    }

    /// Iterates all pages in order.
    pub fn pages<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        let page_size = self.page_size;
        (1..=page_count(items.len(), page_size)).map(move |index| page(items, index, page_size))
    }
}
