//! Company table state: pagination window, id-keyed selection, and per-row busy flags.
//!
//! # Design
//! - Selection is keyed by company id and never derived from the visible page.
//! - Changing the collection resets pagination and selection together.

use crate::core::config::PAGE_SIZES;
use crate::core::logic::PageWindow;
use jam_api_models::Company;
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::functional::Reducible;

/// Zero-based page plus rows per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
}

impl Pagination {
    /// First page with `page_size` rows, snapped to an offered size.
    #[must_use]
    pub fn first(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size: snap_page_size(page_size),
        }
    }

    /// Offset/limit for the page request.
    #[must_use]
    pub fn window(self) -> PageWindow {
        PageWindow {
            offset: u64::from(self.page) * u64::from(self.page_size),
            limit: self.page_size,
        }
    }

    /// Number of pages needed for `total` rows (at least one).
    #[must_use]
    pub fn page_count(self, total: u64) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(u64::from(self.page_size)).max(1)
    }

    /// One-based row range shown on this page, e.g. `(26, 50)`.
    #[must_use]
    pub fn visible_range(self, total: u64) -> Option<(u64, u64)> {
        let window = self.window();
        if total == 0 || window.offset >= total {
            return None;
        }
        let end = (window.offset + u64::from(window.limit)).min(total);
        Some((window.offset + 1, end))
    }
}

/// Closest offered page size, falling back to the smallest.
#[must_use]
pub fn snap_page_size(page_size: u32) -> u32 {
    if PAGE_SIZES.contains(&page_size) {
        page_size
    } else {
        PAGE_SIZES[0]
    }
}

/// Selected company ids, independent of the loaded page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet(BTreeSet<i64>);

impl SelectionSet {
    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Selected ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.0.iter().copied().collect()
    }

    /// Flip one id.
    pub fn toggle(&mut self, id: i64) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    /// Whether every id in `page` is selected (false for an empty page).
    #[must_use]
    pub fn covers(&self, page: &[i64]) -> bool {
        !page.is_empty() && page.iter().all(|id| self.0.contains(id))
    }

    /// Select every id on `page`, or clear them all if they were already selected.
    ///
    /// Ids from other pages are left alone.
    pub fn toggle_page(&mut self, page: &[i64]) {
        if self.covers(page) {
            for id in page {
                self.0.remove(id);
            }
        } else {
            self.0.extend(page.iter().copied());
        }
    }
}

/// Local state of the company table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyTableState {
    /// Collection whose members are shown.
    pub collection_id: String,
    /// Current page window.
    pub pagination: Pagination,
    /// Selected ids across pages.
    pub selection: SelectionSet,
    /// Rows with a like/unlike request outstanding.
    pub busy_rows: BTreeSet<i64>,
}

impl CompanyTableState {
    /// Fresh state for `collection_id`.
    #[must_use]
    pub fn new(collection_id: impl Into<String>, page_size: u32) -> Self {
        Self {
            collection_id: collection_id.into(),
            pagination: Pagination::first(page_size),
            selection: SelectionSet::default(),
            busy_rows: BTreeSet::new(),
        }
    }

    /// Whether the row for `id` shows a spinner.
    #[must_use]
    pub fn is_row_busy(&self, id: i64) -> bool {
        self.busy_rows.contains(&id)
    }

    /// Apply `action`, returning the next state.
    #[must_use]
    pub fn apply(&self, action: TableAction) -> Self {
        let mut next = self.clone();
        match action {
            TableAction::SwitchCollection(collection_id) => {
                if collection_id != self.collection_id {
                    next = Self::new(collection_id, self.pagination.page_size);
                }
            }
            TableAction::SetPage(page) => next.pagination.page = page,
            TableAction::SetPageSize(size) => next.pagination = Pagination::first(size),
            TableAction::ToggleRow(id) => next.selection.toggle(id),
            TableAction::TogglePage(ids) => next.selection.toggle_page(&ids),
            TableAction::ClearSelection => next.selection = SelectionSet::default(),
            TableAction::RowBusy(id) => {
                next.busy_rows.insert(id);
            }
            TableAction::RowIdle(id) => {
                next.busy_rows.remove(&id);
            }
        }
        next
    }
}

/// Transition applied to [`CompanyTableState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableAction {
    /// Show a different collection; resets page and selection.
    SwitchCollection(String),
    /// Jump to a zero-based page.
    SetPage(u32),
    /// Change rows per page; returns to the first page.
    SetPageSize(u32),
    /// Flip the selection of one row.
    ToggleRow(i64),
    /// Select or clear every id on the visible page.
    TogglePage(Vec<i64>),
    /// Drop the whole selection.
    ClearSelection,
    /// Mark a row as waiting on a membership request.
    RowBusy(i64),
    /// Clear a row's busy flag.
    RowIdle(i64),
}

impl Reducible for CompanyTableState {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Ids of the rows on the loaded page, in display order.
#[must_use]
pub fn page_ids(rows: &[Company]) -> Vec<i64> {
    rows.iter().map(|company| company.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_25_starts_at_offset_25() {
        let pagination = Pagination {
            page: 1,
            page_size: 25,
        };
        assert_eq!(
            pagination.window(),
            PageWindow {
                offset: 25,
                limit: 25
            }
        );
        assert_eq!(
            crate::core::logic::collection_page_path("B", pagination.window()),
            "/collections/B?offset=25&limit=25"
        );
    }

    #[test]
    fn page_math_handles_partial_and_empty_pages() {
        let pagination = Pagination {
            page: 2,
            page_size: 25,
        };
        assert_eq!(pagination.page_count(51), 3);
        assert_eq!(pagination.visible_range(51), Some((51, 51)));
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.visible_range(0), None);
    }

    #[test]
    fn unsupported_page_size_snaps_to_default() {
        assert_eq!(Pagination::first(50).page_size, 50);
        assert_eq!(Pagination::first(7).page_size, 25);
    }

    #[test]
    fn selection_survives_page_changes() {
        let state = CompanyTableState::new("B", 25)
            .apply(TableAction::ToggleRow(3))
            .apply(TableAction::ToggleRow(1))
            .apply(TableAction::SetPage(4));
        assert_eq!(state.selection.ids(), vec![1, 3]);
        assert_eq!(state.pagination.page, 4);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let state = CompanyTableState::new("B", 25)
            .apply(TableAction::SetPage(3))
            .apply(TableAction::SetPageSize(100));
        assert_eq!(
            state.pagination,
            Pagination {
                page: 0,
                page_size: 100
            }
        );
    }

    #[test]
    fn switching_collection_clears_selection() {
        let state = CompanyTableState::new("A", 50)
            .apply(TableAction::ToggleRow(9))
            .apply(TableAction::SetPage(2))
            .apply(TableAction::SwitchCollection("B".into()));
        assert!(state.selection.is_empty());
        assert_eq!(state.pagination.page, 0);
        assert_eq!(state.pagination.page_size, 50);

        let same = state
            .apply(TableAction::ToggleRow(1))
            .apply(TableAction::SwitchCollection("B".into()));
        assert_eq!(same.selection.len(), 1);
    }

    #[test]
    fn selection_counts_follow_toggles() {
        let mut selection = SelectionSet::default();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        selection.toggle(7);
        selection.toggle(3);
        assert!(!selection.is_empty());
        assert_eq!(selection.len(), 2);
        selection.toggle(7);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn page_toggle_leaves_off_page_ids() {
        let mut selection = SelectionSet::default();
        selection.toggle(99);
        selection.toggle_page(&[1, 2]);
        assert_eq!(selection.ids(), vec![1, 2, 99]);
        assert!(selection.covers(&[1, 2]));

        selection.toggle_page(&[1, 2]);
        assert_eq!(selection.ids(), vec![99]);
        assert!(!selection.covers(&[]));
    }

    #[test]
    fn busy_flags_are_per_row() {
        let state = CompanyTableState::new("B", 25)
            .apply(TableAction::RowBusy(4))
            .apply(TableAction::RowBusy(5))
            .apply(TableAction::RowIdle(4));
        assert!(!state.is_row_busy(4));
        assert!(state.is_row_busy(5));
    }
}
