//! Plain-text rendering of the schedule for `--print`.

use crate::state::FlightRecord;
use crate::util::fit_width;

/// Column widths, in field order.
const COLUMNS: [(&str, usize); 9] = [
    ("Flight No.", 10),
    ("Origin", 11),
    ("Destination", 11),
    ("Frequency", 12),
    ("Effective", 10),
    ("Departure", 9),
    ("Arrival", 7),
    ("Airline", 10),
    ("Status", 9),
];

/// What: Format rows as an aligned text table.
///
/// Inputs:
/// - `rows`: Records in display order
///
/// Output:
/// - Header line, separator, one line per record; each line ends with `\n`.
#[must_use]
pub fn format_table(rows: &[&FlightRecord]) -> String {
    let line = |cells: [String; 9]| -> String {
        let mut out = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, w))| fit_width(cell, w))
            .collect::<Vec<_>>()
            .join("  ");
        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    };
    let mut out = line(COLUMNS.map(|(label, _)| label.to_string()));
    let total: usize = COLUMNS.iter().map(|(_, w)| w + 2).sum::<usize>() - 2;
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for rec in rows {
        out.push_str(&line([
            rec.flight_number.clone(),
            rec.origin.clone(),
            rec.destination.clone(),
            rec.frequency.clone(),
            rec.effective_date.clone(),
            rec.departure_time.clone(),
            rec.arrival_time.clone(),
            crate::theme::airline_label(rec.airline),
            rec.status.to_string(),
        ]));
    }
    out
}
