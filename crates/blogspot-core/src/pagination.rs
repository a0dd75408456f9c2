//! Offset pagination over an already filtered and sorted list.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Items `[page_index * page_size, page_index * page_size + page_size)`,
/// clipped to the slice. Empty past the end or when `page_size` is zero.
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Changing the size always goes back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.page_index, self.page_size)
    }

    pub fn info(&self, total: usize) -> PageInfo {
        PageInfo::new(total, self.page_index, self.page_size)
    }
}

/// Summary of one page for display ("6–10 of 11").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// 1-based position of the first row shown, 0 when nothing is shown.
    pub from: usize,
    /// 1-based position of the last row shown, 0 when nothing is shown.
    pub to: usize,
}

impl PageInfo {
    pub fn new(total: usize, page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let start = page_index.saturating_mul(page_size);
        let (from, to) = if start < total {
            (start + 1, start.saturating_add(page_size).min(total))
        } else {
            (0, 0)
        };

        Self {
            total,
            page_index,
            page_size,
            page_count: total.div_ceil(page_size),
            from,
            to,
        }
    }

    pub fn label(&self) -> String {
        format!("{}–{} of {}", self.from, self.to, self.total)
    }
}
