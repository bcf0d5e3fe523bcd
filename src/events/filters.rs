//! Filter bar input: flight search, origin/destination selectors and date range.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{DateRange, FilterSpec};
use crate::state::{AppState, Focus};
use crate::util::parse_date;

use super::utils::{cycle_optional, is_plain};

/// What: Interpret the raw date inputs.
///
/// Output:
/// - `Ok(None)` when both are empty, `Ok(Some(range))` when both parse in order,
///   otherwise `Err` with a message for the filter bar.
fn typed_date_range(app: &AppState) -> Result<Option<DateRange>, String> {
    let from = app.date_from_input.trim();
    let to = app.date_to_input.trim();
    match (from.is_empty(), to.is_empty()) {
        (true, true) => Ok(None),
        (false, true) | (true, false) => Err("Enter both dates".to_string()),
        (false, false) => {
            let start = parse_date(from).ok_or_else(|| format!("Invalid start date '{from}'"))?;
            let end = parse_date(to).ok_or_else(|| format!("Invalid end date '{to}'"))?;
            if start > end {
                return Err("Start date is after end date".to_string());
            }
            Ok(Some(app.controller.date_range(start, end)))
        }
    }
}

/// What: Push the filter bar inputs to the controller.
///
/// Details:
/// - An incomplete or invalid date range is left out of the filter and reported in
///   `app.date_error`.
/// - The table cursor returns to the first row of the first page.
pub fn apply_filter_inputs(app: &mut AppState) {
    let date_range = match typed_date_range(app) {
        Ok(r) => {
            app.date_error = None;
            r
        }
        Err(msg) => {
            app.date_error = Some(msg);
            None
        }
    };
    let text = app.flight_input.as_str();
    let spec = FilterSpec {
        flight_number: (!text.is_empty()).then(|| text.to_string()),
        origins: app.origin_filter.iter().cloned().collect(),
        destinations: app.destination_filter.iter().cloned().collect(),
        date_range,
    };
    if &spec == app.controller.filter() {
        return;
    }
    app.controller.on_filter_changed(spec);
    app.table_state.select(Some(0));
    app.clamp_selection();
}

/// Reset every filter input and show the whole schedule.
pub fn clear_filters(app: &mut AppState) {
    app.flight_input.clear();
    app.origin_filter = None;
    app.destination_filter = None;
    app.date_from_input.clear();
    app.date_to_input.clear();
    apply_filter_inputs(app);
}

/// Edit a free-text input; returns whether the text changed.
fn edit_text(input: &mut String, ke: &KeyEvent, accept: impl Fn(char) -> bool) -> bool {
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            let changed = !input.is_empty();
            input.clear();
            changed
        }
        KeyCode::Char(c) if is_plain(ke) && accept(c) => {
            input.push(c);
            true
        }
        KeyCode::Backspace => input.pop().is_some(),
        _ => false,
    }
}

/// What: Handle a key while one of the filter inputs is focused.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Output:
/// - Always `false`; the filter bar never exits the application.
///
/// Details:
/// - Enter moves on to the next input, Esc returns to the table.
pub fn handle_filter_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Enter => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::Esc => {
            app.focus = Focus::Table;
            return false;
        }
        _ => {}
    }
    let changed = match app.focus {
        Focus::Search => edit_text(&mut app.flight_input, &ke, |_| true),
        Focus::DateFrom => edit_text(&mut app.date_from_input, &ke, is_date_char),
        Focus::DateTo => edit_text(&mut app.date_to_input, &ke, is_date_char),
        Focus::Origin | Focus::Destination => {
            let is_origin = app.focus == Focus::Origin;
            let options = if is_origin {
                &app.controller.filter_options().origins
            } else {
                &app.controller.filter_options().destinations
            };
            let current = if is_origin {
                app.origin_filter.as_deref()
            } else {
                app.destination_filter.as_deref()
            };
            let next = match ke.code {
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    Some(cycle_optional(current, options, true))
                }
                KeyCode::Left | KeyCode::Up => Some(cycle_optional(current, options, false)),
                KeyCode::Backspace | KeyCode::Delete => Some(None),
                _ => None,
            };
            match next {
                Some(value) if is_origin => {
                    app.origin_filter = value;
                    true
                }
                Some(value) => {
                    app.destination_filter = value;
                    true
                }
                None => false,
            }
        }
        Focus::Table => false,
    };
    if changed {
        apply_filter_inputs(app);
    }
    false
}

const fn is_date_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}
