//! Event handling layer for Curio's TUI.
//!
//! Dispatch order matters: an open modal consumes every key, then global
//! shortcuts, then table navigation and selection keys.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Modal, PageRequest};

mod bulk;
mod table;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling
    match &app.modal {
        Modal::Alert { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::BulkSelect { .. } => {
            bulk::handle_bulk_key(ke, app);
            return false;
        }
        Modal::None => {}
    }

    // Global shortcuts
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::Char('s') => {
            app.modal = if app.total == 0 {
                Modal::Alert {
                    message: "Catalog not loaded yet".to_string(),
                }
            } else {
                Modal::BulkSelect {
                    input: String::new(),
                    error: None,
                }
            };
            return false;
        }
        _ => {}
    }

    table::handle_table_key(ke, app, fetch_tx)
}
