//! Modal overlay rendering (alert, help, bulk-selection prompt).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::Theme;

/// Centered rectangle of at most `width`×`height` cells within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dismissable bordered box shared by the modal renderers.
fn modal_block<'a>(title: &'a str, th: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve))
        .style(Style::default().bg(th.base))
        .title(format!(" {title} "))
}

/// Render the active modal, if any, on top of the main layout.
pub(super) fn render(f: &mut Frame, app: &AppState, th: &Theme) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, message, th),
        Modal::Help => render_help(f, th),
        Modal::BulkSelect { input, error } => render_bulk_select(f, app, input, error.as_deref(), th),
    }
}

fn render_alert(f: &mut Frame, message: &str, th: &Theme) {
    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default().fg(th.overlay2),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(modal_block("Notice", th));
    f.render_widget(body, area);
}

fn render_help(f: &mut Frame, th: &Theme) {
    let area = centered_rect(52, 14, f.area());
    f.render_widget(Clear, area);
    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), Style::default().fg(th.sapphire)),
            Span::styled(desc.to_string(), Style::default().fg(th.text)),
        ])
    };
    let body = Paragraph::new(vec![
        key("↑/k ↓/j", "move cursor"),
        key("←/h →/l", "previous / next page"),
        key("g / G", "first / last page"),
        key("space", "toggle row selection"),
        key("a", "select / deselect whole page"),
        key("s", "select first N across all pages"),
        key("?", "this help"),
        key("q", "quit"),
    ])
    .block(modal_block("Help", th));
    f.render_widget(body, area);
}

/// The "select first N" overlay: an input line plus an optional validation
/// message. Stays open until submission succeeds or Esc.
fn render_bulk_select(
    f: &mut Frame,
    app: &AppState,
    input: &str,
    error: Option<&str>,
    th: &Theme,
) {
    let area = centered_rect(56, 8, f.area());
    f.render_widget(Clear, area);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("How many of the {} records to select?", app.total),
            Style::default().fg(th.text),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(
                input.to_string(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(th.overlay2)),
        ]),
    ];
    if let Some(msg) = error {
        lines.push(Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(th.red),
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Enter to apply · Esc to cancel",
        Style::default().fg(th.overlay2),
    )));
    let body = Paragraph::new(lines).block(modal_block("Bulk select", th));
    f.render_widget(body, area);
}
