use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::logic::SortKey;
use crate::state::{AppState, FieldName, FlightRecord, Focus};
use crate::theme::{airline_label, theme};

use super::helpers::sort_marker;

/// Column widths in field order.
const WIDTHS: [Constraint; 9] = [
    Constraint::Length(12),
    Constraint::Length(11),
    Constraint::Length(12),
    Constraint::Min(12),
    Constraint::Length(12),
    Constraint::Length(10),
    Constraint::Length(8),
    Constraint::Length(12),
    Constraint::Length(11),
];

fn header_label(app: &AppState, field: FieldName) -> String {
    let sort = app.controller.sort();
    match field {
        FieldName::FlightNumber => {
            format!("{}{}", field.label(), sort_marker(sort, SortKey::FlightNumber))
        }
        FieldName::EffectiveDate => {
            format!("{}{}", field.label(), sort_marker(sort, SortKey::EffectiveDate))
        }
        _ => field.label().to_string(),
    }
}

fn record_row(rec: &FlightRecord) -> Row<'static> {
    let th = theme();
    Row::new(vec![
        Cell::from(Span::styled(
            rec.flight_number.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Cell::from(rec.origin.clone()),
        Cell::from(rec.destination.clone()),
        Cell::from(rec.frequency.clone()),
        Cell::from(rec.effective_date.clone()),
        Cell::from(rec.departure_time.clone()),
        Cell::from(rec.arrival_time.clone()),
        Cell::from(airline_label(rec.airline)),
        Cell::from(Span::styled(
            format!(" {} ", rec.status),
            Style::default()
                .fg(th.base)
                .bg(th.status_color(rec.status))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .style(Style::default().fg(th.subtext0))
}

/// What: Render the current page of the schedule.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: State (rows come from the controller; the cursor from `table_state`)
/// - `area`: Target rectangle
///
/// Details:
/// - Records the data-row rectangle in `app.table_rect` for mouse hit-testing.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Table;
    let header = Row::new(
        FieldName::ALL
            .iter()
            .map(|field| Cell::from(header_label(app, *field)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(th.mauve).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .controller
        .page_rows()
        .into_iter()
        .map(record_row)
        .collect();
    let empty = rows.is_empty();

    let title = Line::from(vec![
        Span::styled("Flight Schedule ", Style::default().fg(th.mauve)),
        Span::styled(
            format!("({} of {})", app.controller.visible_len(), app.controller.store().len()),
            Style::default().fg(th.overlay1),
        ),
    ]);
    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.sapphire } else { th.overlay1 })),
        )
        .row_highlight_style(Style::default().bg(th.surface1).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");

    f.render_stateful_widget(table, area, &mut app.table_state);

    let inner_y = area.y + 2;
    app.table_rect = Some((
        area.x + 1,
        inner_y,
        area.width.saturating_sub(2),
        area.height.saturating_sub(3),
    ));

    if empty {
        let msg = ratatui::widgets::Paragraph::new(Span::styled(
            "No flights match the current filters",
            Style::default().fg(th.subtext0).add_modifier(Modifier::ITALIC),
        ));
        let rect = Rect {
            x: area.x + 2,
            y: inner_y,
            width: area.width.saturating_sub(4),
            height: 1.min(area.height.saturating_sub(3)),
        };
        f.render_widget(msg, rect);
    }
}
