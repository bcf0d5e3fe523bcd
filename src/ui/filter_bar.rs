use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// One bordered input box; the border lights up when focused.
fn input_box(f: &mut Frame, area: Rect, title: &str, value: &str, placeholder: &str, focused: bool) {
    let th = theme();
    let (border, title_color) = if focused {
        (th.sapphire, th.mauve)
    } else {
        (th.overlay1, th.overlay1)
    };
    let mut spans = Vec::new();
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(th.subtext0).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(th.text)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(th.sapphire)));
    }
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(title.to_string(), Style::default().fg(title_color)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(widget, area);
}

/// What: Render the filter bar: flight search, origin, destination and date range.
///
/// Details:
/// - Selectors show "All" when no value is chosen; an incomplete date range
///   is reported in the date box titles.
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
        ])
        .split(area);

    input_box(
        f,
        cols[0],
        "Search Flight No.",
        &app.flight_input,
        "e.g. UK",
        app.focus == Focus::Search,
    );
    input_box(
        f,
        cols[1],
        "Origin ◂▸",
        app.origin_filter.as_deref().unwrap_or(""),
        "All",
        app.focus == Focus::Origin,
    );
    input_box(
        f,
        cols[2],
        "Destination ◂▸",
        app.destination_filter.as_deref().unwrap_or(""),
        "All",
        app.focus == Focus::Destination,
    );
    let (from_title, to_title) = match app.date_error.as_deref() {
        Some(err) => (format!("From · {err}"), "To".to_string()),
        None => ("From".to_string(), "To".to_string()),
    };
    input_box(
        f,
        cols[3],
        &from_title,
        &app.date_from_input,
        "YYYY-MM-DD",
        app.focus == Focus::DateFrom,
    );
    input_box(
        f,
        cols[4],
        &to_title,
        &app.date_to_input,
        "YYYY-MM-DD",
        app.focus == Focus::DateTo,
    );
}
