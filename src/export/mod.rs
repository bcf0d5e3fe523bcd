//! Tabular export of flight records.
//!
//! The exporter is a pure serializer: it writes whatever sequence it is
//! handed (normally the filtered and sorted view) and has no filtering of
//! its own. An empty sequence produces a header-only artifact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::state::{FieldName, FlightRecord};

pub mod csv;
pub mod json;

/// Header label of the id column; the other labels come from [`FieldName::label`].
pub const ID_LABEL: &str = "ID";

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, opens in any spreadsheet application.
    #[default]
    Csv,
    /// Array of objects keyed by column label.
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Parse a format name (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Serialized export ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, e.g. `FlightSchedule.csv`.
    pub file_name: String,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
    /// Number of data rows (header excluded).
    pub rows: usize,
}

/// Column header labels in field-declaration order.
#[must_use]
pub fn header_labels() -> Vec<&'static str> {
    std::iter::once(ID_LABEL)
        .chain(FieldName::ALL.iter().map(|f| f.label()))
        .collect()
}

/// Cell values of one record in the same order as [`header_labels`].
#[must_use]
pub fn row_values(rec: &FlightRecord) -> Vec<String> {
    vec![
        rec.id.to_string(),
        rec.flight_number.clone(),
        rec.origin.clone(),
        rec.destination.clone(),
        rec.frequency.clone(),
        rec.effective_date.clone(),
        rec.departure_time.clone(),
        rec.arrival_time.clone(),
        rec.airline.to_string(),
        rec.status.to_string(),
    ]
}

/// What: Serialize `records` into an export artifact.
///
/// Inputs:
/// - `records`: Rows to export, in output order
/// - `format`: Target format
/// - `file_stem`: File name without extension (e.g. `FlightSchedule`)
///
/// Output:
/// - [`ExportArtifact`] with one header plus one row per record.
pub fn export(
    records: &[&FlightRecord],
    format: ExportFormat,
    file_stem: &str,
) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Csv => csv::encode(records).into_bytes(),
        ExportFormat::Json => json::encode(records)?,
    };
    tracing::debug!(
        rows = records.len(),
        bytes = bytes.len(),
        format = format.extension(),
        "[Export] Encoded artifact"
    );
    Ok(ExportArtifact {
        file_name: format!("{file_stem}.{}", format.extension()),
        bytes,
        rows: records.len(),
    })
}

/// What: Write an artifact into `dir` atomically.
///
/// Inputs:
/// - `artifact`: Encoded export
/// - `dir`: Destination directory (created when missing)
///
/// Output:
/// - Final path of the written file.
///
/// Details:
/// - Bytes go to a hidden sibling temp file which is renamed over the target,
///   so readers see either the previous file or the complete new one.
pub fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf, ExportError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ExportError::Io { path, source }
    };
    fs::create_dir_all(dir).map_err(io_err(dir))?;
    let target = dir.join(&artifact.file_name);
    let tmp = dir.join(format!(".{}.{}.tmp", artifact.file_name, std::process::id()));
    let written = fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(&artifact.bytes)?;
        f.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(&target)(e));
    }
    if let Err(e) = fs::rename(&tmp, &target) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(&target)(e));
    }
    tracing::info!(path = %target.display(), rows = artifact.rows, "[Export] Artifact written");
    Ok(target)
}
