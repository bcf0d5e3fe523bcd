//! UI-facing state split into small files and re-exported under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::{EditForm, Modal};
pub use types::{Airline, FieldName, FlightRecord, FlightStatus, Focus, RecordId};
