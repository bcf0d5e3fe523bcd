use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::logic::REQUIRED_FIELDS;
use crate::state::modal::{EditForm, is_choice_field};
use crate::state::{AppState, FieldName, Modal};
use crate::theme::theme;

use super::helpers::centered_rect;

/// Render the active modal (alert, help or edit form) centered over `area`.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, message, area),
        Modal::Help => render_help(f, area),
        Modal::EditFlight(form) => render_edit_form(f, form, area),
    }
}

fn modal_block(title: &str) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .style(Style::default().bg(th.base))
}

fn render_alert(f: &mut Frame, message: &str, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, area.width.saturating_sub(10).min(80), 7);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.red))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Style::default().fg(th.subtext0),
        )),
    ];
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(modal_block("Error"));
    f.render_widget(p, rect);
}

/// Key binding lines shown in the help modal.
const HELP_LINES: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Move focus between table and filters"),
    ("↑ ↓ / j k", "Move the row cursor"),
    ("← → / h l", "Previous / next page"),
    ("Enter / e", "Edit the highlighted flight"),
    ("Click twice", "Edit the clicked flight"),
    ("s", "Sort by flight number (asc, desc, off)"),
    ("d", "Sort by effective date (asc, desc, off)"),
    ("x / Ctrl+E", "Export the filtered view"),
    ("f", "Toggle export format (CSV / JSON)"),
    ("c / Ctrl+R", "Clear all filters"),
    ("/", "Jump to the flight search"),
    ("q / Ctrl+C", "Quit"),
    ("", ""),
    ("Edit form", ""),
    ("↑ ↓", "Move between fields"),
    ("← →", "Cycle origin, destination, airline, status"),
    ("Enter / Ctrl+S", "Save"),
    ("Esc", "Cancel"),
];

fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let h = u16::try_from(HELP_LINES.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = centered_rect(area, 72, h);
    f.render_widget(Clear, rect);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:18}"),
                    Style::default().fg(th.overlay1).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled((*action).to_string(), Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(modal_block("Help")), rect);
}

fn render_edit_form(f: &mut Frame, form: &EditForm, area: Rect) {
    let th = theme();
    let rows = u16::try_from(FieldName::ALL.len()).unwrap_or(u16::MAX);
    let rect = centered_rect(area, 64, rows + 6);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in FieldName::ALL.iter().enumerate() {
        let selected = idx == form.selected;
        let required = if REQUIRED_FIELDS.contains(field) { "*" } else { " " };
        let value = form.value(*field);
        let shown = if is_choice_field(*field) {
            format!("◂ {value} ▸")
        } else if selected {
            format!("{value}▏")
        } else {
            value.to_string()
        };
        let label_style = if selected {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        let value_style = if selected {
            Style::default().fg(th.text).bg(th.surface1)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "› " } else { "  " }, label_style),
            Span::styled(format!("{required}{:12}", field.label()), label_style),
            Span::styled(shown, value_style),
        ]));
    }
    lines.push(Line::from(""));
    match form.error.as_deref() {
        Some(err) => lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(th.red),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter save · Esc cancel · ←/→ cycle choices",
            Style::default().fg(th.subtext0),
        ))),
    }
    let title = format!("Edit Flight #{}", form.id);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(modal_block(&title)),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::test_app_state;
    use crate::state::RecordId;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(term: &Terminal<TestBackend>) -> String {
        term.backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: Each modal variant renders without panicking and shows its title
    ///
    /// - Input: Alert, Help and an edit form with an error on a 100x30 backend
    /// - Output: Titles and the error text appear in the buffer
    fn modals_render_variants() {
        let mut term = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        let mut app = test_app_state();

        app.modal = Modal::Alert {
            message: "Export failed".into(),
        };
        term.draw(|f| render_modals(f, &app, f.area())).expect("draw");
        assert!(screen_text(&term).contains("Export failed"));

        app.modal = Modal::Help;
        term.draw(|f| render_modals(f, &app, f.area())).expect("draw");
        assert!(screen_text(&term).contains("Help"));

        app.controller.on_edit_requested(RecordId(2)).expect("edit");
        let staged = app.controller.session().staged().cloned().expect("staged");
        let mut form = EditForm::from_staged(RecordId(2), &staged);
        form.error = Some("missing required fields: Flight No.".into());
        app.modal = Modal::EditFlight(form);
        term.draw(|f| render_modals(f, &app, f.area())).expect("draw");
        let text = screen_text(&term);
        assert!(text.contains("Edit Flight #2"));
        assert!(text.contains("UK 883"));
        assert!(text.contains("missing required fields"));
    }
}
