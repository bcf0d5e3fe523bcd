use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::{AppState, Focus, Modal};

use super::modals::open_edit_form;
use super::table::move_selection;

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event including position and button
/// - `app`: Mutable application state (table rect, selection)
///
/// Output:
/// - Always `false`; the mouse never exits the application.
///
/// Details:
/// - While a modal is open, a left click closes alerts and help; other events are ignored.
/// - Wheel scrolling moves the table cursor; a left click on a row selects it
///   and focuses the table. Clicking the row that is already selected opens it
///   in the edit form.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let is_left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));
    match &app.modal {
        Modal::None => {}
        Modal::Alert { .. } | Modal::Help => {
            if is_left_down {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::EditFlight(_) => return false,
    }
    match m.kind {
        MouseEventKind::ScrollDown => move_selection(app, 1),
        MouseEventKind::ScrollUp => move_selection(app, -1),
        _ if is_left_down => {
            if let Some((x, y, w, h)) = app.table_rect
                && m.column >= x
                && m.column < x + w
                && m.row >= y
                && m.row < y + h
            {
                let row = usize::from(m.row - y) + app.table_state.offset();
                if row < app.controller.page_rows().len() {
                    let reclick =
                        app.focus == Focus::Table && app.table_state.selected() == Some(row);
                    app.table_state.select(Some(row));
                    app.focus = Focus::Table;
                    if reclick {
                        open_edit_form(app);
                    }
                }
            }
        }
        _ => {}
    }
    false
}
