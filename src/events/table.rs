//! Table navigation and selection keys.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::SelectionEvent;
use crate::state::{AppState, PageRequest};

/// Handle a key while no modal is open. Never requests exit.
pub(super) fn handle_table_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Left | KeyCode::Char('h') => {
            let target = app.page.saturating_sub(1);
            change_page(app, target, fetch_tx);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let target = app.page + 1;
            change_page(app, target, fetch_tx);
        }
        KeyCode::Char('g') => change_page(app, 1, fetch_tx),
        KeyCode::Char('G') => {
            let last = app.page_count();
            change_page(app, last, fetch_tx);
        }
        KeyCode::Char(' ') => toggle_current_row(app),
        KeyCode::Char('a') => toggle_select_all(app),
        _ => {}
    }
    false
}

/// Move the cursor by `delta`, clamped to the visible rows.
fn move_cursor(app: &mut AppState, delta: isize) {
    if app.records.is_empty() {
        return;
    }
    let len = app.records.len() as isize;
    let idx = (app.cursor as isize + delta).clamp(0, len - 1);
    app.cursor = usize::try_from(idx).unwrap_or(0);
    app.table_state.select(Some(app.cursor));
}

/// What: Navigate to `target` (1-indexed), issuing a fetch request.
///
/// Details:
/// - Clamped to the known page range. A no-op when already on the target,
///   unless that page failed to load: a failed page shows empty with a
///   status message, and navigating again retries its fetch.
/// - Does not cancel an in-flight fetch; the response handler discards
///   anything that is not the latest request id.
fn change_page(app: &mut AppState, target: usize, fetch_tx: &mpsc::UnboundedSender<PageRequest>) {
    let max = app.page_count().max(1);
    let target = target.clamp(1, max);
    let retry_current = app.records.is_empty() && !app.loading && !app.status_text.is_empty();
    if target == app.page && !retry_current {
        return;
    }
    app.page = target;
    app.cursor = 0;
    app.table_state.select(None);
    // Old rows belong to a different window; show the page as empty until
    // its records arrive.
    app.records.clear();
    let req = app.next_request(target);
    tracing::debug!(page = target, id = req.id, "page change requested");
    let _ = fetch_tx.send(req);
}

/// Flip the checked state of the cursor row via the manual-toggle diff.
fn toggle_current_row(app: &mut AppState) {
    if app.records.is_empty() {
        return;
    }
    let idx = app.cursor.min(app.records.len() - 1);
    let window = app.window();
    let mut checked = app.selection.selected_ids_on_page(&app.records, window);
    let id = app.records[idx].id;
    if !checked.insert(id) {
        checked.remove(&id);
    }
    let _ = app.selection.apply(SelectionEvent::ManualToggle {
        records: &app.records,
        window,
        checked,
    });
}

/// Select-all checkbox semantics: checked unless every visible row already
/// is, in which case the page is deselected.
fn toggle_select_all(app: &mut AppState) {
    if app.records.is_empty() {
        return;
    }
    let window = app.window();
    let all_selected = app
        .records
        .iter()
        .enumerate()
        .all(|(i, r)| app.selection.is_selected(r.id, window, i));
    let _ = app.selection.apply(SelectionEvent::SelectAll {
        records: &app.records,
        checked: !all_selected,
    });
}
