use crossterm::event::{KeyEvent, KeyModifiers};

use crate::export;
use crate::state::{AppState, Modal};

/// Whether the key carries a printable character without Ctrl/Alt.
pub fn is_plain(ke: &KeyEvent) -> bool {
    !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// What: Step through `values` starting from `current`.
///
/// Inputs:
/// - `current`: Present value; when absent from `values` the first entry is returned
/// - `values`: Ordered choices
/// - `forward`: Direction
///
/// Output:
/// - Neighbouring choice (wrapping), or `current` unchanged when there are no choices.
pub fn cycle_value(current: &str, values: &[String], forward: bool) -> String {
    let n = values.len();
    if n == 0 {
        return current.to_string();
    }
    let next = match values.iter().position(|v| v == current) {
        Some(i) if forward => (i + 1) % n,
        Some(i) => (i + n - 1) % n,
        None => 0,
    };
    values[next].clone()
}

/// What: Step an optional filter selection through "all" and each option.
///
/// Output:
/// - `None` stands for "all"; the order is all → first → ... → last → all.
pub fn cycle_optional(current: Option<&str>, options: &[String], forward: bool) -> Option<String> {
    let slots = options.len() + 1;
    let pos = current
        .and_then(|c| options.iter().position(|o| o == c))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| options[i].clone())
}

/// What: Export every visible row to the configured directory.
///
/// Details:
/// - Success shows a toast with the written path; failure opens an alert.
pub fn export_current_view(app: &mut AppState) {
    let result = app
        .controller
        .on_export_requested(app.export_format, &app.export_file_stem)
        .and_then(|artifact| {
            export::write_artifact(&artifact, &app.export_dir).map(|p| (p, artifact.rows))
        });
    match result {
        Ok((path, rows)) => {
            app.show_toast(format!("Exported {rows} rows to {}", path.display()));
        }
        Err(e) => {
            tracing::error!(error = %e, "[Export] Failed");
            app.modal = Modal::Alert {
                message: format!("Export failed: {e}"),
            };
        }
    }
}

/// Switch between CSV and JSON exports.
pub fn toggle_export_format(app: &mut AppState) {
    app.export_format = match app.export_format {
        export::ExportFormat::Csv => export::ExportFormat::Json,
        export::ExportFormat::Json => export::ExportFormat::Csv,
    };
    app.show_toast(format!(
        "Export format: {}",
        app.export_format.extension().to_uppercase()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::state::app_state::test_app_state;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    /// What: Value cycling wraps and restarts on unknown values
    ///
    /// - Input: Three locations; last value forward, first backward, unknown value
    /// - Output: First, last, first
    fn cycle_value_wraps() {
        let locs = names(&["Delhi", "Mumbai", "Pune"]);
        assert_eq!(cycle_value("Pune", &locs, true), "Delhi");
        assert_eq!(cycle_value("Delhi", &locs, false), "Pune");
        assert_eq!(cycle_value("Goa", &locs, true), "Delhi");
        assert_eq!(cycle_value("Goa", &[], true), "Goa");
    }

    #[test]
    /// What: Optional filter cycling passes through "all"
    ///
    /// - Input: Two options, forward from None three times; backward from None
    /// - Output: A, B, None; backward lands on B
    fn cycle_optional_includes_all() {
        let opts = names(&["A", "B"]);
        let a = cycle_optional(None, &opts, true);
        assert_eq!(a.as_deref(), Some("A"));
        let b = cycle_optional(a.as_deref(), &opts, true);
        assert_eq!(b.as_deref(), Some("B"));
        assert_eq!(cycle_optional(b.as_deref(), &opts, true), None);
        assert_eq!(cycle_optional(None, &opts, false).as_deref(), Some("B"));
    }

    #[test]
    /// What: Exporting writes the visible rows and raises a toast
    ///
    /// - Input: Seed state with export dir set to a temp dir; JSON format
    /// - Output: FlightSchedule.json exists with three rows; toast mentions it
    fn export_writes_file_and_toasts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app_state();
        app.export_dir = dir.path().to_path_buf();
        toggle_export_format(&mut app);
        assert_eq!(app.export_format, ExportFormat::Json);
        export_current_view(&mut app);
        let path = dir.path().join("FlightSchedule.json");
        let text = std::fs::read_to_string(&path).expect("read export");
        let rows: Vec<serde_json::Value> = serde_json::from_str(&text).expect("json");
        assert_eq!(rows.len(), 3);
        assert!(
            app.toast_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Exported 3 rows"))
        );
        assert_eq!(app.modal, Modal::None);
    }
}
