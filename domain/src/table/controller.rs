//! The list controller: owns the interaction state of one list screen and
//! recomputes the visible slice after every transition.
//!
//! Transitions never fail. Unknown sort fields leave the order untouched and
//! out-of-range pages clamp.

use serde::{Deserialize, Serialize};

use super::filter::filter_indices;
use super::pager::{clamp_page, page_count, paginate};
use super::sort::{sort_indices, SortDirection};
use super::value::Record;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query, sort and page of one list screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub query: String,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
    pub current_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
        }
    }
}

/// What the screen renders after a recompute
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, T> {
    pub rows: Vec<&'a T>,
    pub page_count: usize,
    pub effective_page: usize,
    pub total_matching: usize,
    pub page_size: usize,
}

impl<'a, T> ListView<'a, T> {
    /// Up to `width` page numbers around the current page, shifted so the
    /// window never runs past either end.
    pub fn page_window(&self, width: usize) -> Vec<usize> {
        let total = self.page_count;
        if total == 0 || width == 0 {
            return Vec::new();
        }
        if total <= width {
            return (1..=total).collect();
        }

        let mut start = self.effective_page.saturating_sub(width / 2).max(1);
        let mut end = start + width - 1;
        if end > total {
            end = total;
            start = total - width + 1;
        }
        (start..=end).collect()
    }

    /// 1-based `(from, to, of)` for the "Showing x to y of z" label
    pub fn showing_range(&self) -> (usize, usize, usize) {
        if self.rows.is_empty() {
            return (0, 0, self.total_matching);
        }
        let from = (self.effective_page - 1) * self.page_size + 1;
        let to = from + self.rows.len() - 1;
        (from, to, self.total_matching)
    }

    pub fn has_previous(&self) -> bool {
        self.effective_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page < self.page_count
    }
}

/// Filter, sort and paginate state machine over a wholesale-refreshed
/// collection.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    records: Vec<T>,
    page_size: usize,
    state: ListState,
    /// Positions into `records` after filter and sort
    matching: Vec<usize>,
}

impl<T: Record> ListController<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<T>, page_size: usize) -> Self {
        let mut controller = Self {
            records,
            page_size: page_size.max(1),
            state: ListState::default(),
            matching: Vec::new(),
        };
        controller.recompute();
        controller
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.current_page = 1;
        self.recompute();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.state.sort_field.as_deref() == Some(field) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_field = Some(field.to_string());
            self.state.sort_direction = SortDirection::Ascending;
        }
        self.recompute();
    }

    pub fn set_page(&mut self, page: i64) {
        let count = page_count(self.matching.len(), self.page_size);
        self.state.current_page = clamp_page(page, count);
        self.recompute();
    }

    /// Replace the collection; query, sort and page survive, the page is re-clamped
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.recompute();
    }

    pub fn view(&self) -> ListView<'_, T> {
        let page = paginate(&self.matching, self.page_size, self.state.current_page as i64);

        ListView {
            rows: page
                .items
                .iter()
                .map(|&index| &self.records[index])
                .collect(),
            page_count: page.page_count,
            effective_page: page.effective_page,
            total_matching: self.matching.len(),
            page_size: self.page_size,
        }
    }

    fn recompute(&mut self) {
        let mut matching = filter_indices(&self.records, &self.state.query);
        sort_indices(
            &self.records,
            &mut matching,
            self.state.sort_field.as_deref(),
            self.state.sort_direction,
        );
        self.matching = matching;

        let count = page_count(self.matching.len(), self.page_size);
        self.state.current_page = clamp_page(self.state.current_page as i64, count);

        log::debug!(
            "list recomputed: query={:?} sort={:?} {:?} page={}/{} matching={} of {}",
            self.state.query,
            self.state.sort_field,
            self.state.sort_direction,
            self.state.current_page,
            count,
            self.matching.len(),
            self.records.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::{fruits, Fruit};

    fn numbered(count: i64) -> Vec<Fruit> {
        (1..=count).map(|id| Fruit::new(id, &format!("Fruit {}", id))).collect()
    }

    #[test]
    fn test_initial_view() {
        let controller = ListController::new(fruits(&["Banana", "Apple"]));
        let view = controller.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.effective_page, 1);
        assert_eq!(view.total_matching, 2);
        assert_eq!(controller.state(), &ListState::default());
    }

    #[test]
    fn test_toggle_sort_keeps_page() {
        let mut controller = ListController::new(numbered(25));
        controller.set_page(3);
        controller.toggle_sort("name");
        assert_eq!(controller.state().current_page, 3);
        assert_eq!(controller.state().sort_direction, SortDirection::Ascending);

        controller.toggle_sort("id");
        assert_eq!(controller.state().sort_field.as_deref(), Some("id"));
        assert_eq!(controller.state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_view_is_the_pager_slice_of_the_sorted_matches() {
        let mut controller = ListController::with_page_size(numbered(23), 5);
        controller.toggle_sort("id");
        controller.toggle_sort("id");
        controller.set_page(2);

        let descending: Vec<i64> = (1..=23).rev().collect();
        let expected = paginate(&descending, 5, 2);
        let view = controller.view();
        let ids: Vec<i64> = view.rows.iter().map(|fruit| fruit.id).collect();
        assert_eq!(ids, expected.items);
        assert_eq!(view.page_count, expected.page_count);
        assert_eq!(view.effective_page, expected.effective_page);
    }

    #[test]
    fn test_negative_page_clamps_to_first() {
        let mut controller = ListController::new(numbered(25));
        controller.set_page(-3);
        assert_eq!(controller.view().effective_page, 1);
    }

    #[test]
    fn test_set_records_keeps_state_and_reclamps() {
        let mut controller = ListController::new(numbered(25));
        controller.toggle_sort("id");
        controller.toggle_sort("id");
        controller.set_page(3);

        controller.set_records(numbered(12));
        assert_eq!(controller.state().sort_direction, SortDirection::Descending);
        assert_eq!(controller.state().current_page, 2);

        let view = controller.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].id, 2);
    }

    #[test]
    fn test_set_page_size() {
        let mut controller = ListController::new(numbered(25));
        controller.set_page(3);
        controller.set_page_size(25);
        assert_eq!(controller.state().current_page, 1);
        assert_eq!(controller.view().rows.len(), 25);

        controller.set_page_size(0);
        assert_eq!(controller.page_size(), 1);
    }

    #[test]
    fn test_page_window() {
        let mut controller = ListController::with_page_size(numbered(100), 10);
        assert_eq!(controller.view().page_window(5), vec![1, 2, 3, 4, 5]);

        controller.set_page(6);
        assert_eq!(controller.view().page_window(5), vec![4, 5, 6, 7, 8]);

        controller.set_page(10);
        assert_eq!(controller.view().page_window(5), vec![6, 7, 8, 9, 10]);

        let small = ListController::new(numbered(25));
        assert_eq!(small.view().page_window(5), vec![1, 2, 3]);

        let empty: ListController<Fruit> = ListController::new(Vec::new());
        assert!(empty.view().page_window(5).is_empty());
    }

    #[test]
    fn test_showing_range_and_neighbours() {
        let mut controller = ListController::new(numbered(25));
        let view = controller.view();
        assert_eq!(view.showing_range(), (1, 10, 25));
        assert!(!view.has_previous());
        assert!(view.has_next());

        controller.set_page(3);
        let view = controller.view();
        assert_eq!(view.showing_range(), (21, 25, 25));
        assert!(view.has_previous());
        assert!(!view.has_next());

        controller.set_query("zzz");
        assert_eq!(controller.view().showing_range(), (0, 0, 0));
    }
}
