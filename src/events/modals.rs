//! Modal key handling: alerts, help and the flight edit form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::modal::{EditForm, is_choice_field};
use crate::state::{Airline, AppState, FieldName, FlightStatus, Modal};

use super::utils::{cycle_value, is_plain};

/// What: Open the edit form for the highlighted row.
///
/// Details:
/// - Starts an edit session on the controller; an unknown id opens an alert instead.
pub fn open_edit_form(app: &mut AppState) {
    let Some(id) = app.selected_record().map(|r| r.id) else {
        return;
    };
    if let Err(e) = app.controller.on_edit_requested(id) {
        app.modal = Modal::Alert {
            message: e.to_string(),
        };
        return;
    }
    if let Some(staged) = app.controller.session().staged() {
        app.modal = Modal::EditFlight(EditForm::from_staged(id, staged));
    }
}

/// Values a choice field cycles through.
fn choices(app: &AppState, field: FieldName) -> Vec<String> {
    match field {
        FieldName::Origin | FieldName::Destination => app.locations.clone(),
        FieldName::Airline => Airline::ALL.iter().map(ToString::to_string).collect(),
        FieldName::Status => FlightStatus::ALL.iter().map(ToString::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Stage the highlighted field's text in the session and record any error on the form.
fn stage_selected(app: &mut AppState, form: &mut EditForm) {
    let field = form.selected_field();
    form.error = app
        .controller
        .on_field_changed(field, form.value(field))
        .err()
        .map(|e| e.to_string());
}

/// What: Stage every field and commit the session.
///
/// Details:
/// - On success the modal closes and a toast names the saved flight.
/// - On failure the form stays open with the error shown.
fn commit_form(app: &mut AppState, form: &mut EditForm) -> bool {
    for field in FieldName::ALL {
        if let Err(e) = app.controller.on_field_changed(field, form.value(field)) {
            form.error = Some(e.to_string());
            return false;
        }
    }
    match app.controller.on_commit() {
        Ok(id) => {
            app.clamp_selection();
            let name = app
                .controller
                .store()
                .get(id)
                .map_or_else(|| id.to_string(), |r| r.flight_number.clone());
            app.show_toast(format!("Saved {name}"));
            true
        }
        Err(e) => {
            form.error = Some(e.to_string());
            false
        }
    }
}

/// Close the form and drop the session.
fn cancel_form(app: &mut AppState) {
    if let Err(e) = app.controller.on_cancel() {
        tracing::debug!(error = %e, "[Edit] Cancel without session");
    }
    app.modal = Modal::None;
}

/// What: Handle a key while the edit form is open.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Details:
/// - Up/Down (Tab/Shift+Tab) move between fields.
/// - Left/Right (or Space) cycle choice fields; other fields accept typed text.
/// - Enter or Ctrl+S commits; Esc cancels.
fn handle_edit_key(ke: KeyEvent, app: &mut AppState) {
    let Modal::EditFlight(mut form) = std::mem::take(&mut app.modal) else {
        return;
    };
    let field = form.selected_field();
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => {
            cancel_form(app);
            return;
        }
        KeyCode::Enter => {
            if commit_form(app, &mut form) {
                return;
            }
        }
        KeyCode::Char('s') if ctrl => {
            if commit_form(app, &mut form) {
                return;
            }
        }
        KeyCode::Down | KeyCode::Tab => form.select_next(),
        KeyCode::Up | KeyCode::BackTab => form.select_prev(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if is_choice_field(field) => {
            let forward = ke.code != KeyCode::Left;
            let next = cycle_value(form.value(field), &choices(app, field), forward);
            if let Some(v) = form.selected_value_mut() {
                *v = next;
            }
            stage_selected(app, &mut form);
        }
        KeyCode::Char(c) if is_plain(&ke) && !is_choice_field(field) => {
            if let Some(v) = form.selected_value_mut() {
                v.push(c);
            }
            stage_selected(app, &mut form);
        }
        KeyCode::Backspace if !is_choice_field(field) => {
            if let Some(v) = form.selected_value_mut() {
                v.pop();
            }
            stage_selected(app, &mut form);
        }
        _ => {}
    }
    app.modal = Modal::EditFlight(form);
}

/// What: Route a key to the active modal.
///
/// Output:
/// - `true` when a modal was open and consumed the key.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match &app.modal {
        Modal::None => false,
        Modal::Alert { .. } | Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')
            ) {
                app.modal = Modal::None;
            }
            true
        }
        Modal::EditFlight(_) => {
            handle_edit_key(ke, app);
            true
        }
    }
}
