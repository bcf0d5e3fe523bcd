//! Event handling layer for the flightdesk TUI.
//!
//! `handle_event` routes keys to the open modal first, then to global
//! shortcuts, then to the focused area (table or filter bar).

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, Modal};

mod filters;
mod modals;
mod mouse;
mod table;
mod utils;

pub use filters::{apply_filter_inputs, clear_filters};
pub use utils::export_current_view;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if modals::handle_modal_key(ke, app) {
                return false;
            }

            let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
            match ke.code {
                KeyCode::Char('c') if ctrl => return true,
                KeyCode::Char('e') if ctrl => {
                    utils::export_current_view(app);
                    return false;
                }
                KeyCode::Char('r') if ctrl => {
                    filters::clear_filters(app);
                    return false;
                }
                KeyCode::F(1) => {
                    app.modal = Modal::Help;
                    return false;
                }
                KeyCode::Tab => {
                    app.focus = app.focus.next();
                    return false;
                }
                KeyCode::BackTab => {
                    app.focus = app.focus.prev();
                    return false;
                }
                _ => {}
            }

            if app.focus == Focus::Table {
                table::handle_table_key(ke, app)
            } else {
                filters::handle_filter_key(ke, app)
            }
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::test_app_state;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    /// What: Tab moves focus and typed text goes to the focused input
    ///
    /// - Input: Tab, then "ai"
    /// - Output: Search focused; only AI 101 visible
    fn tab_then_type_filters() {
        let mut app = test_app_state();
        assert!(!handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &mut app));
        assert_eq!(app.focus, Focus::Search);
        handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &mut app);
        handle_event(press(KeyCode::Char('i'), KeyModifiers::NONE), &mut app);
        let rows: Vec<String> = app
            .controller
            .visible()
            .iter()
            .map(|r| r.flight_number.clone())
            .collect();
        assert_eq!(rows, vec!["AI 101"]);
    }

    #[test]
    /// What: `q` only quits from the table; Ctrl+C quits anywhere
    ///
    /// - Input: `q` in the search box, then Ctrl+C
    /// - Output: `q` typed into the input; Ctrl+C requests exit
    fn quit_keys_respect_focus() {
        let mut app = test_app_state();
        app.focus = Focus::Search;
        assert!(!handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &mut app));
        assert_eq!(app.flight_input, "q");
        assert!(handle_event(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app
        ));
    }

    #[test]
    /// What: Keys go to an open modal before global shortcuts
    ///
    /// - Input: Edit form open, Tab pressed
    /// - Output: Focus unchanged; form cursor moved to the second field
    fn modal_takes_precedence() {
        let mut app = test_app_state();
        handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert!(matches!(app.modal, Modal::EditFlight(_)));
        handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &mut app);
        assert_eq!(app.focus, Focus::Table);
        match &app.modal {
            Modal::EditFlight(form) => assert_eq!(form.selected, 1),
            other => panic!("expected edit form, got {other:?}"),
        }
    }
}
