//! Terminal rendering for flightdesk.
//!
//! `ui` lays the screen out as a filter bar, the schedule table and a
//! one-line footer, then draws any modal and the toast on top.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod filter_bar;
pub mod helpers;
mod modals;
mod table;

/// Draw one full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    filter_bar::render_filter_bar(f, app, chunks[0]);
    table::render_table(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
    modals::render_modals(f, app, area);
    render_toast(f, app, area);
}

/// Page indicator on the left, key hints on the right.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let ctl = &app.controller;
    let line = Line::from(vec![
        Span::styled(
            format!(
                " {} ",
                helpers::page_indicator(ctl.page(), ctl.page_count(), ctl.visible_len())
            ),
            Style::default().fg(th.base).bg(th.sapphire),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Export: {}", app.export_format.extension().to_uppercase()),
            Style::default().fg(th.mauve),
        ),
        Span::raw("  "),
        Span::styled(
            "Tab focus · Enter edit · s/d sort · ←/→ page · x export · ? help · q quit",
            Style::default().fg(th.subtext0),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Short-lived message in the bottom-right corner.
fn render_toast(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(msg) = app.toast_message.as_deref() else {
        return;
    };
    let th = theme();
    let text_w = u16::try_from(unicode_width::UnicodeWidthStr::width(msg)).unwrap_or(u16::MAX);
    let w = text_w.saturating_add(4).min(area.width);
    let h = 3.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w),
        y: area.y + area.height.saturating_sub(h + 1),
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let toast = Paragraph::new(Line::from(Span::styled(msg, Style::default().fg(th.text))))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.green))
                .style(Style::default().bg(th.base)),
        );
    f.render_widget(toast, rect);
}
