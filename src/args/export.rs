//! Headless export for `--export`.

use std::path::PathBuf;

use crate::config::{self, Settings};
use crate::controller::ScheduleController;
use crate::error::CliError;
use crate::export::{self, ExportFormat};

use super::Args;

/// What: Resolve the export format from `--format` or settings.
///
/// Output:
/// - `Err(UnknownFormat)` when `--format` is not csv/json.
pub fn format_from_args(args: &Args, settings: &Settings) -> Result<ExportFormat, CliError> {
    match args.format.as_deref() {
        None => Ok(settings.export_format),
        Some(raw) => {
            ExportFormat::from_config_key(raw).ok_or_else(|| CliError::UnknownFormat(raw.into()))
        }
    }
}

/// What: Export the controller's visible rows to disk.
///
/// Inputs:
/// - `args`: `--format` and `--output` overrides
/// - `settings`: Defaults for format, directory and file stem
/// - `ctl`: Controller with filters and sort already applied
///
/// Output:
/// - Path of the written file.
pub fn handle_export(
    args: &Args,
    settings: &Settings,
    ctl: &ScheduleController,
) -> Result<PathBuf, CliError> {
    let format = format_from_args(args, settings)?;
    let dir = args
        .output
        .clone()
        .unwrap_or_else(|| config::export_dir(settings.export_dir.as_deref()));
    let artifact = ctl.on_export_requested(format, &settings.export_file_stem)?;
    let path = export::write_artifact(&artifact, &dir)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_records;
    use crate::store::RecordStore;

    #[test]
    /// What: Headless export honors --format and --output
    ///
    /// - Input: `--format JSON --output <tmp>` over the seed
    /// - Output: `<tmp>/FlightSchedule.json` with three objects
    fn export_to_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings::default();
        let ctl = ScheduleController::new(
            RecordStore::from_records(seed_records()).expect("seed"),
            &settings,
        );
        let args = Args {
            format: Some("JSON".into()),
            output: Some(dir.path().to_path_buf()),
            ..Args::default()
        };
        let path = handle_export(&args, &settings, &ctl).expect("export");
        assert_eq!(path, dir.path().join("FlightSchedule.json"));
        let rows: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["Flight No."], "6E 2045");
    }

    #[test]
    /// What: Unknown formats are rejected before anything is written
    ///
    /// - Input: `--format xlsx`
    /// - Output: UnknownFormat
    fn unknown_format() {
        let args = Args {
            format: Some("xlsx".into()),
            ..Args::default()
        };
        assert!(matches!(
            format_from_args(&args, &Settings::default()),
            Err(CliError::UnknownFormat(f)) if f == "xlsx"
        ));
    }
}
