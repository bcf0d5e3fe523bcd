//! Central `AppState` container shared by the event and UI layers.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::config::{self, Settings};
use crate::controller::ScheduleController;
use crate::export::ExportFormat;
use crate::state::modal::Modal;
use crate::state::types::{FlightRecord, Focus};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Application state mutated by input handlers and read by the renderer.
///
/// The schedule itself lives in [`ScheduleController`]; everything else here
/// is terminal-side state: raw filter inputs, focus, table cursor, modal.
#[derive(Debug)]
pub struct AppState {
    /// Owner of the records, filters, sort, pagination and edit session.
    pub controller: ScheduleController,
    /// Which part of the screen receives keys.
    pub focus: Focus,
    /// Cursor within the current page.
    pub table_state: TableState,
    /// Raw flight-number search text.
    pub flight_input: String,
    /// Selected origin filter; `None` shows all.
    pub origin_filter: Option<String>,
    /// Selected destination filter; `None` shows all.
    pub destination_filter: Option<String>,
    /// Raw start date text.
    pub date_from_input: String,
    /// Raw end date text.
    pub date_to_input: String,
    /// Why the typed date range is not applied, if it is not.
    pub date_error: Option<String>,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Optional short-lived info message rendered at the bottom-right corner.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is hidden.
    pub toast_expires_at: Option<Instant>,
    /// Format used by the export key.
    pub export_format: ExportFormat,
    /// Directory export artifacts are written to.
    pub export_dir: PathBuf,
    /// Export file name without extension.
    pub export_file_stem: String,
    /// Known locations offered by the edit form.
    pub locations: Vec<String>,
    /// Inner table rectangle (x, y, w, h) for mouse hit-testing.
    pub table_rect: Option<(u16, u16, u16, u16)>,
}

impl AppState {
    /// What: Build UI state around a controller.
    ///
    /// Inputs:
    /// - `controller`: Seeded schedule controller
    /// - `settings`: Export and form settings
    ///
    /// Output:
    /// - State focused on the table with the first row highlighted.
    #[must_use]
    pub fn new(controller: ScheduleController, settings: &Settings) -> Self {
        let mut table_state = TableState::default();
        if controller.visible_len() > 0 {
            table_state.select(Some(0));
        }
        Self {
            controller,
            focus: Focus::Table,
            table_state,
            flight_input: String::new(),
            origin_filter: None,
            destination_filter: None,
            date_from_input: String::new(),
            date_to_input: String::new(),
            date_error: None,
            modal: Modal::None,
            toast_message: None,
            toast_expires_at: None,
            export_format: settings.export_format,
            export_dir: config::export_dir(settings.export_dir.as_deref()),
            export_file_stem: settings.export_file_stem.clone(),
            locations: settings.locations.clone(),
            table_rect: None,
        }
    }

    /// Record under the table cursor on the current page.
    #[must_use]
    pub fn selected_record(&self) -> Option<&FlightRecord> {
        let idx = self.table_state.selected()?;
        self.controller.page_rows().get(idx).copied()
    }

    /// What: Keep the cursor inside the current page after the view changed.
    ///
    /// Details:
    /// - Empty pages clear the selection; otherwise the cursor is clamped to the last row.
    pub fn clamp_selection(&mut self) {
        let rows = self.controller.page_rows().len();
        if rows == 0 {
            self.table_state.select(None);
        } else {
            let idx = self.table_state.selected().unwrap_or(0).min(rows - 1);
            self.table_state.select(Some(idx));
        }
    }

    /// Show `message` as a toast for [`TOAST_DURATION`].
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + TOAST_DURATION);
    }

    /// Drop the toast once its deadline passed.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast_expires_at.is_some_and(|deadline| now >= deadline) {
            self.toast_message = None;
            self.toast_expires_at = None;
        }
    }
}

#[cfg(test)]
pub(crate) fn test_app_state() -> AppState {
    let store = crate::store::RecordStore::from_records(crate::fixtures::seed_records())
        .expect("seed store");
    let settings = Settings::default();
    AppState::new(ScheduleController::new(store, &settings), &settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: New state highlights the first row of the seed
    ///
    /// - Input: Seeded controller with default settings
    /// - Output: Cursor on 6E 2045, table focused, no modal
    fn new_state_selects_first_row() {
        let app = test_app_state();
        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(
            app.selected_record().map(|r| r.flight_number.as_str()),
            Some("6E 2045")
        );
        assert_eq!(app.export_file_stem, "FlightSchedule");
    }

    #[test]
    /// What: Toasts expire only after their deadline
    ///
    /// - Input: Toast shown, expiry checked now and after the deadline
    /// - Output: Still visible now, gone afterwards
    fn toast_expiry() {
        let mut app = test_app_state();
        app.show_toast("Exported");
        app.expire_toast(Instant::now());
        assert!(app.toast_message.is_some());
        app.expire_toast(Instant::now() + TOAST_DURATION + Duration::from_millis(1));
        assert!(app.toast_message.is_none());
        assert!(app.toast_expires_at.is_none());
    }

    #[test]
    /// What: Selection clamps when the page shrinks
    ///
    /// - Input: Cursor on row 2, then filter down to one row
    /// - Output: Cursor on row 0; empty view clears it
    fn clamp_selection_after_filter() {
        let mut app = test_app_state();
        app.table_state.select(Some(2));
        app.controller.on_filter_changed(crate::logic::FilterSpec {
            flight_number: Some("UK".into()),
            ..Default::default()
        });
        app.clamp_selection();
        assert_eq!(app.table_state.selected(), Some(0));
        app.controller.on_filter_changed(crate::logic::FilterSpec {
            flight_number: Some("zz".into()),
            ..Default::default()
        });
        app.clamp_selection();
        assert_eq!(app.table_state.selected(), None);
    }
}
