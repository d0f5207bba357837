//! Integration tests driving the event layer with synthetic key events.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use curio::app::handle_page_response;
use curio::events::handle_event;
use curio::logic::SelectionMode;
use curio::state::{AppState, Artwork, Modal, PageRequest, PageResponse};

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn app_with_page(page: usize, ids: &[i64], total: usize) -> AppState {
    let mut app = AppState::default();
    app.page = page;
    app.total = total;
    app.records = ids
        .iter()
        .map(|&id| Artwork {
            id,
            ..Artwork::default()
        })
        .collect();
    app.table_state.select(Some(0));
    app
}

fn fetch_channel() -> (
    mpsc::UnboundedSender<PageRequest>,
    mpsc::UnboundedReceiver<PageRequest>,
) {
    mpsc::unbounded_channel()
}

#[test]
fn space_toggles_the_cursor_row() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[10, 11, 12], 3);

    handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
    assert!(app.selection.include.contains(&10));
    assert_eq!(app.selection.mode, SelectionMode::Manual);

    handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
    assert!(app.selection.exclude.contains(&10));
    assert!(!app.selection.include.contains(&10));
}

#[test]
fn select_all_key_toggles_whole_page() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[10, 11, 12], 3);

    handle_event(key(KeyCode::Char('a')), &mut app, &tx);
    assert_eq!(app.selection.total_selected(3), 3);

    // Every row is selected, so the same key deselects the page.
    handle_event(key(KeyCode::Char('a')), &mut app, &tx);
    assert_eq!(app.selection.total_selected(3), 0);
    assert_eq!(app.selection.exclude.len(), 3);
}

#[test]
fn page_navigation_issues_requests_and_clamps() {
    let (tx, mut rx) = fetch_channel();
    let mut app = app_with_page(1, &[1, 2, 3], 50); // 5 pages of 12

    // Left from page 1 is a no-op.
    handle_event(key(KeyCode::Left), &mut app, &tx);
    assert_eq!(app.page, 1);
    assert!(rx.try_recv().is_err());

    handle_event(key(KeyCode::Right), &mut app, &tx);
    assert_eq!(app.page, 2);
    assert!(app.loading);
    assert!(app.records.is_empty(), "old window rows are dropped");
    let req = rx.try_recv().expect("page change sends a request");
    assert_eq!(req.page, 2);
    assert_eq!(req.id, app.latest_request_id);

    // 'G' jumps to the last page.
    handle_event(key(KeyCode::Char('G')), &mut app, &tx);
    assert_eq!(app.page, 5);
    let req = rx.try_recv().expect("jump sends a request");
    assert_eq!(req.page, 5);
}

#[test]
fn manual_keys_reset_an_active_bulk_target() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[10, 11, 12], 36);
    app.selection.submit_bulk(20, 36).expect("valid bulk");

    handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
    assert_eq!(app.selection.mode, SelectionMode::Manual);
    assert_eq!(app.selection.bulk_target, 0);
}

#[test]
fn bulk_overlay_accepts_digits_and_submits() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[10, 11, 12], 36);
    app.selection.include.insert(10);

    handle_event(key(KeyCode::Char('s')), &mut app, &tx);
    assert!(matches!(app.modal, Modal::BulkSelect { .. }));

    // Non-digits are ignored by the input.
    for c in ['x', '2', '0'] {
        handle_event(key(KeyCode::Char(c)), &mut app, &tx);
    }
    if let Modal::BulkSelect { input, .. } = &app.modal {
        assert_eq!(input, "20");
    } else {
        panic!("bulk overlay closed unexpectedly");
    }

    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(app.selection.mode, SelectionMode::Bulk);
    assert_eq!(app.selection.bulk_target, 20);
    assert!(app.selection.include.is_empty(), "bulk submission clears sets");
}

#[test]
fn bulk_overlay_stays_open_on_invalid_input() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[10], 12);
    let sel_before = app.selection.clone();

    handle_event(key(KeyCode::Char('s')), &mut app, &tx);
    // 99 > total of 12
    handle_event(key(KeyCode::Char('9')), &mut app, &tx);
    handle_event(key(KeyCode::Char('9')), &mut app, &tx);
    handle_event(key(KeyCode::Enter), &mut app, &tx);

    match &app.modal {
        Modal::BulkSelect { error, .. } => {
            assert!(error.as_deref().is_some_and(|e| e.contains("12")));
        }
        other => panic!("expected open overlay, got {other:?}"),
    }
    assert_eq!(app.selection, sel_before);

    // Empty submission is also rejected.
    handle_event(key(KeyCode::Backspace), &mut app, &tx);
    handle_event(key(KeyCode::Backspace), &mut app, &tx);
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert!(matches!(app.modal, Modal::BulkSelect { error: Some(_), .. }));

    handle_event(key(KeyCode::Esc), &mut app, &tx);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(app.selection, sel_before);
}

#[test]
fn navigation_retries_a_failed_page() {
    let (tx, mut rx) = fetch_channel();
    let mut app = AppState::default();

    // The very first fetch fails: no records, no known total.
    let req = app.next_request(1);
    handle_page_response(
        &mut app,
        PageResponse {
            id: req.id,
            page: 1,
            result: Err("network down".to_string()),
        },
    );
    assert!(!app.loading);
    assert_eq!(app.total, 0);

    // Any navigation key clamps back onto page 1 and must re-issue the
    // fetch rather than dead-ending the session.
    handle_event(key(KeyCode::Right), &mut app, &tx);
    let retry = rx.try_recv().expect("navigation retries the failed page");
    assert_eq!(retry.page, 1);
    assert_eq!(retry.id, app.latest_request_id);
    assert!(app.loading);

    // While the retry is in flight, further keys do not pile on requests.
    handle_event(key(KeyCode::Left), &mut app, &tx);
    assert!(rx.try_recv().is_err());

    // Once the retry succeeds, same-page navigation is a no-op again.
    handle_page_response(
        &mut app,
        PageResponse {
            id: retry.id,
            page: 1,
            result: Ok(curio::state::ArtworkPage {
                records: vec![Artwork {
                    id: 1,
                    ..Artwork::default()
                }],
                total: 1,
            }),
        },
    );
    handle_event(key(KeyCode::Char('g')), &mut app, &tx);
    assert!(rx.try_recv().is_err());
}

#[test]
fn bulk_key_alerts_while_catalog_is_unloaded() {
    let (tx, _rx) = fetch_channel();
    let mut app = AppState::default();
    handle_event(key(KeyCode::Char('s')), &mut app, &tx);
    assert!(matches!(app.modal, Modal::Alert { .. }));
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(app.modal, Modal::None);
}

#[test]
fn quit_keys_request_exit() {
    let (tx, _rx) = fetch_channel();
    let mut app = app_with_page(1, &[1], 1);
    assert!(handle_event(key(KeyCode::Char('q')), &mut app, &tx));
    assert!(handle_event(
        CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        &mut app,
        &tx
    ));
    // While a modal is open, 'q' types nothing and does not quit.
    app.modal = Modal::Help;
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app, &tx));
}
