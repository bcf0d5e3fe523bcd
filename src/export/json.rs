//! JSON encoding of flight records.

use serde::Serialize;

use crate::error::ExportError;
use crate::state::FlightRecord;

/// One exported row; keys are the column labels in declaration order.
#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(rename = "ID")]
    id: u64,
    #[serde(rename = "Flight No.")]
    flight_number: &'a str,
    #[serde(rename = "Origin")]
    origin: &'a str,
    #[serde(rename = "Destination")]
    destination: &'a str,
    #[serde(rename = "Frequency")]
    frequency: &'a str,
    #[serde(rename = "Effective")]
    effective_date: &'a str,
    #[serde(rename = "Departure")]
    departure_time: &'a str,
    #[serde(rename = "Arrival")]
    arrival_time: &'a str,
    #[serde(rename = "Airline")]
    airline: &'static str,
    #[serde(rename = "Status")]
    status: &'static str,
}

impl<'a> From<&'a FlightRecord> for JsonRow<'a> {
    fn from(r: &'a FlightRecord) -> Self {
        Self {
            id: r.id.0,
            flight_number: &r.flight_number,
            origin: &r.origin,
            destination: &r.destination,
            frequency: &r.frequency,
            effective_date: &r.effective_date,
            departure_time: &r.departure_time,
            arrival_time: &r.arrival_time,
            airline: r.airline.as_str(),
            status: r.status.as_str(),
        }
    }
}

/// Encode records as a pretty-printed JSON array of objects.
pub fn encode(records: &[&FlightRecord]) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<JsonRow<'_>> = records.iter().map(|r| JsonRow::from(*r)).collect();
    Ok(serde_json::to_vec_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_records;

    #[test]
    /// What: JSON rows keep label keys in column order
    ///
    /// - Input: Seed record 2
    /// - Output: Object whose keys appear ID first and Status last, values intact
    fn encode_uses_labels_in_order() {
        let seed = seed_records();
        let bytes = encode(&[&seed[1]]).expect("encode");
        let text = String::from_utf8(bytes).expect("utf8");
        let id_pos = text.find("\"ID\"").expect("id key");
        let status_pos = text.find("\"Status\"").expect("status key");
        assert!(id_pos < status_pos);
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed[0]["Flight No."], "UK 883");
        assert_eq!(parsed[0]["Status"], "Full");
        assert_eq!(parsed[0]["ID"], 2);
    }
}
