//! Error types shared by the store, edit session, exporter and loaders.

use std::path::PathBuf;

use crate::state::{FieldName, RecordId};

/// Failures of [`crate::store::RecordStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with this id exists; the store is unchanged.
    #[error("no flight record with id {0}")]
    NotFound(RecordId),
    /// A seed fixture reused an id.
    #[error("duplicate flight record id {0}")]
    DuplicateId(RecordId),
}

/// Failures of [`crate::logic::edit::EditSession`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Operation not allowed in the current session state; nothing changed.
    #[error("cannot {op} while {state}")]
    InvalidTransition {
        /// Operation that was attempted.
        op: &'static str,
        /// Session state at the time (`idle` or `editing`).
        state: &'static str,
    },
    /// Required fields are empty; the session stays in editing.
    #[error("missing required fields: {}", join_fields(.0))]
    ValidationFailed(Vec<FieldName>),
    /// A staged value could not be parsed for its field.
    #[error("invalid value {value:?} for {field}")]
    InvalidValue {
        /// Field being updated.
        field: FieldName,
        /// Raw value that was rejected.
        value: String,
    },
    /// The commit reached the store and the store refused it.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures while serializing or writing an export artifact.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the artifact file failed; no partial file is left behind.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization failed.
    #[error("failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while loading `settings.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid settings TOML.
    #[error("invalid settings in {path}: {source}")]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// Failures while loading a seed fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Io {
        /// Fixture path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The fixture is not a JSON array of flight records.
    #[error("invalid fixture {path}: {source}")]
    Json {
        /// Fixture path.
        path: PathBuf,
        /// Parser diagnostic.
        #[source]
        source: serde_json::Error,
    },
    /// The records violate a store invariant.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Invalid command-line input for the headless print/export modes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A date flag is not `YYYY-MM-DD`.
    #[error("invalid date for --{flag}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Flag name without dashes.
        flag: &'static str,
        /// Rejected text.
        value: String,
    },
    /// Only one end of the date range was given.
    #[error("--from and --to must be given together")]
    IncompleteDateRange,
    /// `--sort` names no sortable column.
    #[error("unknown sort key '{0}' (expected flight_number or effective_date)")]
    UnknownSortKey(String),
    /// `--format` names no export format.
    #[error("unknown export format '{0}' (expected csv or json)")]
    UnknownFormat(String),
    /// The export itself failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
