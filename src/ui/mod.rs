//! Rendering for Curio's TUI.
//!
//! A pure projection of [`AppState`]: nothing in here mutates selection
//! state. The table re-derives every row's selection mark on each frame.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod modals;
mod table;

/// Render one full frame from the current application state.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);

    table::render_table(f, app, chunks[0], &th);
    table::render_footer(f, app, chunks[1], &th);

    modals::render(f, app, &th);
}
