//! Artwork table and footer rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::logic::SelectionMode;
use crate::state::AppState;
use crate::theme::Theme;
use crate::util::{display_or_na, truncate_to_width, year_or_na};

/// Widest the free-text columns are allowed to get before clipping.
const TEXT_COL_MAX: usize = 40;

/// Render the artwork table with per-row selection marks.
pub(super) fn render_table(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let window = app.window();

    let header = Row::new(
        ["", "ID", "Title", "Origin", "Artist", "Inscriptions", "Start", "End"]
            .into_iter()
            .map(Cell::from),
    )
    .style(
        Style::default()
            .fg(th.mauve)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .records
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let selected = app.selection.is_selected(a.id, window, i);
            let mark = if selected { "[x]" } else { "[ ]" };
            let mark_style = if selected {
                Style::default().fg(th.green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.overlay1)
            };
            let text_style = if selected {
                Style::default().fg(th.text)
            } else {
                Style::default().fg(th.subtext0)
            };
            Row::new(vec![
                Cell::from(mark).style(mark_style),
                Cell::from(a.id.to_string()).style(text_style),
                Cell::from(truncate_to_width(
                    display_or_na(a.title.as_deref()),
                    TEXT_COL_MAX,
                ))
                .style(text_style),
                Cell::from(truncate_to_width(
                    display_or_na(a.place_of_origin.as_deref()),
                    TEXT_COL_MAX,
                ))
                .style(text_style),
                Cell::from(truncate_to_width(
                    display_or_na(a.artist_display.as_deref()),
                    TEXT_COL_MAX,
                ))
                .style(text_style),
                Cell::from(truncate_to_width(
                    display_or_na(a.inscriptions.as_deref()),
                    TEXT_COL_MAX,
                ))
                .style(text_style),
                Cell::from(year_or_na(a.date_start)).style(text_style),
                Cell::from(year_or_na(a.date_end)).style(text_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.lavender))
                .title(" Artworks "),
        )
        .row_highlight_style(
            Style::default()
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

/// Render the footer: paging summary, selection summary, transient status.
pub(super) fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let pages = app.page_count().max(1);
    let mode = match app.selection.mode {
        SelectionMode::Manual => "manual",
        SelectionMode::Bulk => "bulk",
    };
    let mut segs = vec![
        Span::styled(
            format!("Page {}/{pages}", app.page),
            Style::default().fg(th.sapphire),
        ),
        Span::styled(
            format!("  {} artworks", app.total),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            format!(
                "  {} selected ({mode})",
                app.selection.total_selected(app.total)
            ),
            Style::default().fg(th.green),
        ),
    ];
    if app.loading {
        segs.push(Span::styled(
            "  loading…",
            Style::default().fg(th.yellow),
        ));
    }
    let status = if app.status_text.is_empty() {
        Line::from(Span::styled(
            "space toggle · a page · s first N · ←/→ page · ? help · q quit",
            Style::default().fg(th.overlay2),
        ))
    } else {
        Line::from(Span::styled(
            app.status_text.clone(),
            Style::default().fg(th.yellow),
        ))
    };

    let footer = Paragraph::new(vec![Line::from(segs), status]);
    f.render_widget(footer, area);
}
