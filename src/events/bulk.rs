//! Key handling for the bulk-selection overlay.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{SelectionEvent, parse_bulk_input};
use crate::state::{AppState, Modal};

/// What: Drive the bulk overlay's text input and submission.
///
/// Details:
/// - Digits append (bounded), Backspace deletes, Esc cancels.
/// - Enter parses and submits; on rejection the overlay stays open showing
///   the validation message and all selection state is left untouched.
pub(super) fn handle_bulk_key(ke: KeyEvent, app: &mut AppState) {
    let total = app.total;
    let Modal::BulkSelect { input, error } = &mut app.modal else {
        return;
    };
    match ke.code {
        KeyCode::Esc => {
            app.modal = Modal::None;
        }
        KeyCode::Backspace => {
            input.pop();
            *error = None;
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if input.len() < 9 {
                input.push(c);
            }
            *error = None;
        }
        KeyCode::Enter => {
            let submitted = parse_bulk_input(input).and_then(|n| {
                app.selection
                    .apply(SelectionEvent::SubmitBulk {
                        requested: n,
                        total,
                    })
                    .map(|()| n)
            });
            match submitted {
                Ok(n) => {
                    tracing::info!(target_count = n, "bulk selection applied");
                    app.status_text = format!("Selected first {n} records");
                    app.modal = Modal::None;
                }
                Err(msg) => *error = Some(msg),
            }
        }
        _ => {}
    }
}
