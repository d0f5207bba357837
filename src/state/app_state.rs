//! Central `AppState` container.

use ratatui::widgets::TableState;

use crate::logic::{PageWindow, SelectionState, page_count};
use crate::sources::catalog::PAGE_SIZE;
use crate::state::modal::Modal;
use crate::state::types::{Artwork, PageRequest};

/// Global application state shared by the event, networking, and UI layers.
///
/// Selection state is owned exclusively here and mutated only on the event
/// loop; the display layer reads derived views and never touches the sets
/// directly. None of this is persisted; a session starts empty.
#[derive(Debug)]
pub struct AppState {
    /// 1-indexed page currently displayed.
    pub page: usize,
    /// Fixed number of records per page.
    pub page_size: usize,
    /// Total record count as last reported by the server (0 until known).
    pub total: usize,
    /// Records of the current page, in server order. Empty while loading or
    /// after a failed fetch.
    pub records: Vec<Artwork>,
    /// The selection engine state.
    pub selection: SelectionState,
    /// Cursor row within `records`.
    pub cursor: usize,
    /// Table widget state for the artwork table.
    pub table_state: TableState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Whether a page fetch is in flight.
    pub loading: bool,
    /// Transient status line (e.g. fetch failures). Cleared on success.
    pub status_text: String,

    // Fetch coordination
    /// Identifier of the most recently issued page request. Responses with
    /// any other id are stale and discarded.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            total: 0,
            records: Vec::new(),
            selection: SelectionState::default(),
            cursor: 0,
            table_state: TableState::default(),
            modal: Modal::None,
            loading: false,
            status_text: String::new(),
            latest_request_id: 0,
            next_request_id: 1,
        }
    }
}

impl AppState {
    /// The page window currently displayed.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.page_size)
    }

    /// Number of pages implied by the known total.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    /// Allocate a monotonically increasing request id for `page` and mark it
    /// as the latest in flight.
    pub const fn next_request(&mut self, page: usize) -> PageRequest {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request_id = id;
        self.loading = true;
        PageRequest { id, page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_page_one_with_nothing_selected() {
        let app = AppState::default();
        assert_eq!(app.page, 1);
        assert_eq!(app.page_size, PAGE_SIZE);
        assert_eq!(app.selection.total_selected(app.total), 0);
        assert!(!app.loading);
    }

    #[test]
    fn request_ids_are_monotonic_and_tracked() {
        let mut app = AppState::default();
        let a = app.next_request(1);
        let b = app.next_request(2);
        assert!(b.id > a.id);
        assert_eq!(app.latest_request_id, b.id);
        assert!(app.loading);
    }
}
