use serde::Serialize;

/// One page of a result list. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item shown, 0 when the list is empty.
    pub first_item: usize,
    pub last_item: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing {}-{} of {} {}",
            self.first_item, self.last_item, self.total_items, noun
        )
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[must_use]
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Clamps a requested page to `[1, total_pages]`. An empty list has a single
/// (empty) page.
#[must_use]
pub fn clamp_page(requested: usize, total_items: usize, page_size: usize) -> usize {
    requested.clamp(1, total_pages(total_items, page_size).max(1))
}

#[must_use]
pub fn paginate<T>(items: &[T], requested: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page = clamp_page(requested, items.len(), page_size);
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    let slice = &items[start..end];

    Page {
        items: slice,
        page,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
        first_item: if slice.is_empty() { 0 } else { start + 1 },
        last_item: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_middle_and_last() {
        let items: Vec<u32> = (1..=30).collect();

        let page = paginate(&items, 2, 12);
        assert_eq!(page.items.first(), Some(&13));
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.summary("parts"), "Showing 13-24 of 30 parts");
        assert!(page.has_next());

        let page = paginate(&items, 3, 12);
        assert_eq!(page.items, &[25, 26, 27, 28, 29, 30]);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let items: Vec<u32> = (1..=30).collect();
        assert_eq!(paginate(&items, 0, 12).page, 1);
        assert_eq!(paginate(&items, 99, 12).page, 3);
        assert_eq!(clamp_page(7, 30, 12), 3);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 4, 12);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.summary("parts"), "Showing 0-0 of 0 parts");
    }
}
