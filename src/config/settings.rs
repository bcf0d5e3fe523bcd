use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::export::ExportFormat;
use crate::logic::sort::{SortDirection, SortKey, SortSpec};

/// Default content written on first run.
pub const SKELETON_SETTINGS_CONTENT: &str = r#"# flightdesk settings

# Rows per table page.
page_size = 5

# Export format: "csv" or "json".
export_format = "csv"

# Directory for exports (defaults to the working directory).
# export_dir = "~/exports"

# Export file name without extension.
export_file_stem = "FlightSchedule"

# Keep records dated exactly on a date-range boundary.
date_range_inclusive = false

# Initial sort column: "flight_number" or "effective_date" (unset = unsorted).
# default_sort = "flight_number"
default_sort_descending = false

# Cities offered for origin and destination in the edit form.
locations = ["Delhi", "Mumbai", "Bangalore", "Chennai", "Pune"]
"#;

/// User settings parsed from `settings.toml`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per table page.
    pub page_size: usize,
    /// Format used by the export action.
    pub export_format: ExportFormat,
    /// Export directory; `None` means the working directory.
    pub export_dir: Option<PathBuf>,
    /// Export file name without extension.
    pub export_file_stem: String,
    /// Keep records dated exactly on a date-range boundary.
    pub date_range_inclusive: bool,
    /// Initial sort column key (see [`SortKey::from_config_key`]).
    pub default_sort: Option<String>,
    /// Start the initial sort descending.
    pub default_sort_descending: bool,
    /// Cities offered in the edit form's origin/destination selectors.
    pub locations: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 5,
            export_format: ExportFormat::Csv,
            export_dir: None,
            export_file_stem: "FlightSchedule".to_string(),
            date_range_inclusive: false,
            default_sort: None,
            default_sort_descending: false,
            locations: ["Delhi", "Mumbai", "Bangalore", "Chennai", "Pune"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    /// Initial sort derived from `default_sort`; unknown keys are ignored.
    #[must_use]
    pub fn initial_sort(&self) -> Option<SortSpec> {
        let key = SortKey::from_config_key(self.default_sort.as_deref()?)?;
        Some(SortSpec {
            key,
            direction: if self.default_sort_descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        })
    }

    /// Clamp values that would break the table (page size of zero, empty stem).
    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = 1;
        }
        if self.export_file_stem.trim().is_empty() {
            self.export_file_stem = Self::default().export_file_stem;
        }
        self
    }
}

/// What: Parse settings from a TOML file.
///
/// Inputs:
/// - `path`: Settings file
///
/// Output:
/// - Parsed settings; missing keys take defaults. `ConfigError` on read or parse failure.
pub fn try_load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings.normalized())
}

/// What: Load settings, falling back to defaults.
///
/// Inputs:
/// - `explicit`: Path from `--config`; `None` uses the default settings path
///
/// Output:
/// - Settings from the file, or `Settings::default()` when the file is missing or invalid.
///
/// Details:
/// - When the default path has no file yet, a commented skeleton is written there.
/// - Invalid files are reported via `tracing::warn!` and otherwise ignored.
pub fn settings(explicit: Option<&Path>) -> Settings {
    let path = explicit.map_or_else(super::paths::settings_path, Path::to_path_buf);
    if !path.is_file() {
        if explicit.is_none() {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match fs::write(&path, SKELETON_SETTINGS_CONTENT) {
                Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "could not write settings skeleton"),
            }
        } else {
            tracing::warn!(path = %path.display(), "settings file not found; using defaults");
        }
        return Settings::default();
    }
    match try_load_settings(&path) {
        Ok(s) => {
            tracing::info!(path = %path.display(), "loaded settings");
            s
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid settings; using defaults");
            Settings::default()
        }
    }
}
