//! Event-loop message handlers.

use tokio::sync::mpsc;

use crate::state::{AppState, PageRequest, PageResponse};

/// Issue a fetch for `page`, marking it as the latest request in flight.
pub fn request_page(
    app: &mut AppState,
    page: usize,
    fetch_tx: &mpsc::UnboundedSender<PageRequest>,
) {
    let req = app.next_request(page);
    let _ = fetch_tx.send(req);
}

/// What: Apply one fetch outcome to the application state.
///
/// Details:
/// - Responses whose id is not the latest issued are stale (a newer page
///   change superseded them) and are dropped without touching state.
/// - On success the page's records and the server total replace the current
///   window contents; the cursor resets to the first row.
/// - On failure the page displays as empty and the error lands in the
///   status line; navigation retries implicitly. Selection state is never
///   touched by fetch outcomes.
pub fn handle_page_response(app: &mut AppState, res: PageResponse) {
    if res.id != app.latest_request_id {
        tracing::debug!(
            id = res.id,
            latest = app.latest_request_id,
            "discarding stale page response"
        );
        return;
    }
    app.loading = false;
    match res.result {
        Ok(page) => {
            app.total = page.total;
            app.records = page.records;
            app.cursor = 0;
            app.table_state
                .select(if app.records.is_empty() { None } else { Some(0) });
            app.status_text.clear();
        }
        Err(msg) => {
            tracing::warn!(page = res.page, error = %msg, "page fetch failed");
            app.records.clear();
            app.table_state.select(None);
            app.status_text = format!("Failed to load page {}: {msg}", res.page);
        }
    }
}
