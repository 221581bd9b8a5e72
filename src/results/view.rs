//! State behind the search results page.
//!
//! Holds the full response from one search and derives the visible list
//! locally; nothing here talks to the server.

use std::collections::HashSet;

use super::filter::PartFilters;
use super::pagination::{Page, paginate};
use super::sort::SortKey;
use crate::constants::results::PAGE_SIZE;
use crate::models::{Part, SearchCriteria};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

#[derive(Debug, Clone)]
pub struct ResultsView {
    criteria: SearchCriteria,
    results: Vec<Part>,
    visible: Vec<Part>,
    filters: PartFilters,
    sort: SortKey,
    page: usize,
    favorites: HashSet<u32>,
}

impl ResultsView {
    #[must_use]
    pub fn new(criteria: SearchCriteria, results: Vec<Part>) -> Self {
        Self {
            criteria,
            visible: results.clone(),
            results,
            filters: PartFilters::default(),
            sort: SortKey::default(),
            page: 1,
            favorites: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!(
            "Parts for {} - {}",
            self.criteria.vehicle_label(),
            self.criteria.category
        )
    }

    /// True when the search itself came back empty, regardless of filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn results(&self) -> &[Part] {
        &self.results
    }

    #[must_use]
    pub fn visible(&self) -> &[Part] {
        &self.visible
    }

    #[must_use]
    pub const fn filters(&self) -> &PartFilters {
        &self.filters
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Replaces the filter set, rebuilds the visible list from the full
    /// response with the current sort, and returns to page 1.
    pub fn set_filters(&mut self, filters: PartFilters) {
        self.filters = filters;
        self.rebuild();
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(PartFilters::default());
    }

    /// Changing the sort keeps the current page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.rebuild();
        self.page = self.clamped(self.page);
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = self.clamped(page);
        self.page
    }

    #[must_use]
    pub fn current_page(&self) -> Page<'_, Part> {
        paginate(&self.visible, self.page, PAGE_SIZE)
    }

    pub fn toggle_favorite(&mut self, part_id: u32) -> FavoriteChange {
        if self.favorites.remove(&part_id) {
            FavoriteChange::Removed
        } else {
            self.favorites.insert(part_id);
            FavoriteChange::Added
        }
    }

    #[must_use]
    pub fn is_favorite(&self, part_id: u32) -> bool {
        self.favorites.contains(&part_id)
    }

    #[must_use]
    pub fn find(&self, part_id: u32) -> Option<&Part> {
        self.results.iter().find(|p| p.id == part_id)
    }

    fn rebuild(&mut self) {
        let mut visible = self.filters.apply(&self.results);
        self.sort.sort(&mut visible);
        self.visible = visible;
    }

    fn clamped(&self, page: usize) -> usize {
        super::pagination::clamp_page(page, self.visible.len(), PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchRequest;
    use crate::services::catalog::{CatalogSettings, PartCatalog, RandomCatalog};

    fn view_with(count: usize, seed: u64) -> ResultsView {
        let criteria = SearchCriteria {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            category: "Cooling System".to_string(),
            query: None,
        };
        let parts = RandomCatalog::new(CatalogSettings {
            min_results: count,
            max_results: count,
            seed: Some(seed),
        })
        .generate(&SearchRequest::from(criteria.clone()));
        ResultsView::new(criteria, parts)
    }

    #[test]
    fn test_initial_state() {
        let view = view_with(20, 1);
        assert_eq!(view.visible().len(), 20);
        assert_eq!(view.sort_key(), SortKey::Relevance);
        let page = view.current_page();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(view.heading(), "Parts for 2021 Toyota Corolla - Cooling System");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = view_with(30, 2);
        assert_eq!(view.go_to_page(3), 3);

        view.set_filters(PartFilters {
            price_range: (0.0, 1000.0),
            ..Default::default()
        });
        assert_eq!(view.current_page().page, 1);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let mut view = view_with(30, 3);
        view.go_to_page(2);
        view.set_sort(SortKey::PriceHigh);
        assert_eq!(view.current_page().page, 2);
        assert!(
            view.visible()
                .windows(2)
                .all(|w| w[0].price >= w[1].price)
        );
    }

    #[test]
    fn test_filter_keeps_active_sort() {
        let mut view = view_with(30, 4);
        view.set_sort(SortKey::PriceLow);
        view.set_filters(PartFilters {
            price_range: (50.0, 400.0),
            ..Default::default()
        });
        assert!(view.visible().windows(2).all(|w| w[0].price <= w[1].price));
        assert!(view.visible().iter().all(|p| (50.0..=400.0).contains(&p.price)));
    }

    #[test]
    fn test_relevance_restores_server_order() {
        let mut view = view_with(15, 5);
        let original: Vec<u32> = view.results().iter().map(|p| p.id).collect();
        view.set_sort(SortKey::Name);
        view.set_sort(SortKey::PriceHigh);
        view.set_sort(SortKey::Relevance);
        let ids: Vec<u32> = view.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, original);
    }

    #[test]
    fn test_page_clamped_when_filters_shrink_list() {
        let mut view = view_with(30, 6);
        view.set_filters(PartFilters {
            price_range: (2000.0, 3000.0),
            ..Default::default()
        });
        assert!(view.visible().is_empty());
        assert!(!view.is_empty());
        assert_eq!(view.go_to_page(5), 1);
        assert_eq!(view.current_page().summary("parts"), "Showing 0-0 of 0 parts");

        view.clear_filters();
        assert_eq!(view.visible().len(), 30);
    }

    #[test]
    fn test_favorites() {
        let mut view = view_with(8, 7);
        assert_eq!(view.toggle_favorite(3), FavoriteChange::Added);
        assert!(view.is_favorite(3));
        assert_eq!(view.toggle_favorite(3), FavoriteChange::Removed);
        assert!(!view.is_favorite(3));
    }
}
