use serde::Serialize;

/// Computes the sliding window of page numbers rendered in a pager
/// control: a leading edge, a neighborhood around the current page and a
/// trailing edge, with `None` marking an elided gap.
fn page_windows(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// View model for one rendered list page.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_windows(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

/// 1-based page cursor over an in-memory collection.
///
/// The cursor is not auto-corrected when the collection shrinks: a page
/// that now lies past the end simply yields an empty slice until the
/// operator navigates again.
#[derive(Clone, Copy, Debug)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for a collection of `len` items.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamps the requested page into `[1, total_pages]`. Out-of-range
    /// input never panics.
    pub fn go_to_page(&mut self, page: usize, len: usize) {
        let last = self.total_pages(len).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Items belonging to the current page, in collection order.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}
