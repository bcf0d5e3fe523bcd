//! Seed data for the record store.

use std::fs;
use std::path::Path;

use crate::error::FixtureError;
use crate::state::{Airline, FlightRecord, FlightStatus, RecordId};
use crate::store::RecordStore;

/// What: Built-in schedule used when no fixture file is given.
///
/// Output:
/// - Three records: `6E 2045` Delhi→Mumbai, `UK 883` Bangalore→Pune, `AI 101` Chennai→Delhi.
#[must_use]
pub fn seed_records() -> Vec<FlightRecord> {
    vec![
        FlightRecord {
            id: RecordId(1),
            flight_number: "6E 2045".into(),
            origin: "Delhi".into(),
            destination: "Mumbai".into(),
            frequency: "Daily".into(),
            effective_date: "2025-08-01".into(),
            departure_time: "06:00".into(),
            arrival_time: "08:00".into(),
            airline: Airline::Indigo,
            status: FlightStatus::Available,
        },
        FlightRecord {
            id: RecordId(2),
            flight_number: "UK 883".into(),
            origin: "Bangalore".into(),
            destination: "Pune".into(),
            frequency: "Mon/Wed/Fri".into(),
            effective_date: "2025-08-03".into(),
            departure_time: "13:00".into(),
            arrival_time: "15:10".into(),
            airline: Airline::Vistara,
            status: FlightStatus::Full,
        },
        FlightRecord {
            id: RecordId(3),
            flight_number: "AI 101".into(),
            origin: "Chennai".into(),
            destination: "Delhi".into(),
            frequency: "Tue/Thu/Sat".into(),
            effective_date: "2025-08-05".into(),
            departure_time: "17:00".into(),
            arrival_time: "19:30".into(),
            airline: Airline::AirIndia,
            status: FlightStatus::Cancelled,
        },
    ]
}

/// What: Load a store from a JSON fixture file, or the built-in seed.
///
/// Inputs:
/// - `path`: Optional path to a JSON array of flight records
///
/// Output:
/// - Seeded [`RecordStore`], or a [`FixtureError`] describing why loading failed.
pub fn load_store(path: Option<&Path>) -> Result<RecordStore, FixtureError> {
    let Some(path) = path else {
        return Ok(RecordStore::from_records(seed_records())?);
    };
    let text = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<FlightRecord> =
        serde_json::from_str(&text).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded fixture");
    Ok(RecordStore::from_records(records)?)
}
