//! Page-window arithmetic.

use serde::Serialize;

use super::model::Record;

/// Position of the current page window over the active records.
///
/// `start_item`/`end_item` are 1-based inclusive bounds; `end_item` is capped
/// at `total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub start_item: usize,
    pub end_item: usize,
}

impl PaginationInfo {
    /// Computes the window for `current_page` (1-based).
    ///
    /// `items_per_page` must be non-zero.
    pub fn compute(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let offset = current_page.saturating_sub(1) * items_per_page;
        Self {
            current_page,
            total_pages: total_items.div_ceil(items_per_page),
            total_items,
            items_per_page,
            start_item: offset + 1,
            end_item: (current_page * items_per_page).min(total_items),
        }
    }

    /// Zero-based slice bounds of the window within `len` items.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.start_item - 1).min(len);
        let end = (start + self.items_per_page).min(len);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of records plus its pagination info.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, F> {
    pub items: Vec<&'a Record<F>>,
    #[serde(flatten)]
    pub info: PaginationInfo,
}
