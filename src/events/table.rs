//! Key handling while the schedule table is focused.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::SortKey;
use crate::state::{AppState, Focus, Modal};

use super::filters::clear_filters;
use super::modals::open_edit_form;
use super::utils::{export_current_view, toggle_export_format};

/// What: Move the table cursor by `delta` rows, crossing page boundaries.
///
/// Details:
/// - Moving past the last row of a page opens the next page at its first row,
///   and moving above the first row opens the previous page at its last row.
pub fn move_selection(app: &mut AppState, delta: isize) {
    let rows = app.controller.page_rows().len();
    if rows == 0 {
        app.table_state.select(None);
        return;
    }
    let cur = app.table_state.selected().unwrap_or(0);
    let page = app.controller.page();
    match cur.checked_add_signed(delta) {
        None if page > 0 => {
            go_to_page(app, page - 1);
            let last = app.controller.page_rows().len().saturating_sub(1);
            app.table_state.select(Some(last));
        }
        None => app.table_state.select(Some(0)),
        Some(t) if t >= rows => {
            if page + 1 < app.controller.page_count() {
                go_to_page(app, page + 1);
            } else {
                app.table_state.select(Some(rows - 1));
            }
        }
        Some(t) => app.table_state.select(Some(t)),
    }
}

/// Show `page` (clamped) with the cursor on its first row.
pub fn go_to_page(app: &mut AppState, page: usize) {
    app.controller.on_page_changed(page);
    app.table_state.select(Some(0));
    app.clamp_selection();
}

/// Cycle the sort on `key` and put the cursor back on the first row.
fn request_sort(app: &mut AppState, key: SortKey) {
    app.controller.on_sort_requested(key);
    app.table_state.select(Some(0));
    app.clamp_selection();
}

/// What: Handle a key while the table has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to exit the application (`q`).
pub fn handle_table_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            go_to_page(app, app.controller.page() + 1);
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            go_to_page(app, app.controller.page().saturating_sub(1));
        }
        KeyCode::Home => go_to_page(app, 0),
        KeyCode::End => go_to_page(app, app.controller.page_count().saturating_sub(1)),
        KeyCode::Enter | KeyCode::Char('e') => open_edit_form(app),
        KeyCode::Char('s') => request_sort(app, SortKey::FlightNumber),
        KeyCode::Char('d') => request_sort(app, SortKey::EffectiveDate),
        KeyCode::Char('x') => export_current_view(app),
        KeyCode::Char('f') => toggle_export_format(app),
        KeyCode::Char('c') => clear_filters(app),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('?') => app.modal = Modal::Help,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::controller::ScheduleController;
    use crate::fixtures::seed_records;
    use crate::store::RecordStore;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn paged_app(page_size: usize) -> AppState {
        let settings = Settings {
            page_size,
            ..Settings::default()
        };
        let store = RecordStore::from_records(seed_records()).expect("seed");
        AppState::new(ScheduleController::new(store, &settings), &settings)
    }

    #[test]
    /// What: Sort keys cycle the flight-number sort
    ///
    /// - Input: `s` once
    /// - Output: Cursor on 6E 2045 with rows 6E 2045, AI 101, UK 883
    fn sort_key_orders_rows() {
        let mut app = paged_app(5);
        app.table_state.select(Some(2));
        assert!(!handle_table_key(key('s'), &mut app));
        let numbers: Vec<String> = app
            .controller
            .page_rows()
            .iter()
            .map(|r| r.flight_number.clone())
            .collect();
        assert_eq!(numbers, vec!["6E 2045", "AI 101", "UK 883"]);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    /// What: Cursor movement crosses page boundaries
    ///
    /// - Input: Page size 2; Down twice, then Up once
    /// - Output: Page 1 row 0 (record 3), then back to page 0 row 1
    fn selection_crosses_pages() {
        let mut app = paged_app(2);
        handle_table_key(key('j'), &mut app);
        handle_table_key(key('j'), &mut app);
        assert_eq!(app.controller.page(), 1);
        assert_eq!(app.selected_record().map(|r| r.id.0), Some(3));
        handle_table_key(key('j'), &mut app);
        assert_eq!(app.selected_record().map(|r| r.id.0), Some(3));
        handle_table_key(key('k'), &mut app);
        assert_eq!(app.controller.page(), 0);
        assert_eq!(app.selected_record().map(|r| r.id.0), Some(2));
    }

    #[test]
    /// What: Page keys clamp at both ends
    ///
    /// - Input: Page size 2; `h` on the first page, End, `l` past the end
    /// - Output: Stays on 0; End lands on 1; `l` stays on 1
    fn page_keys_clamp() {
        let mut app = paged_app(2);
        handle_table_key(key('h'), &mut app);
        assert_eq!(app.controller.page(), 0);
        handle_table_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE), &mut app);
        assert_eq!(app.controller.page(), 1);
        handle_table_key(key('l'), &mut app);
        assert_eq!(app.controller.page(), 1);
    }

    #[test]
    /// What: `q` exits and `?` opens help
    ///
    /// - Input: `?` then `q`
    /// - Output: Help modal; exit requested
    fn quit_and_help() {
        let mut app = paged_app(5);
        assert!(!handle_table_key(key('?'), &mut app));
        assert_eq!(app.modal, Modal::Help);
        assert!(handle_table_key(key('q'), &mut app));
    }
}
