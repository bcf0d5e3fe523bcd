//! CSV encoding of flight records.

use crate::state::FlightRecord;

use super::{header_labels, row_values};

/// Field separator.
const FIELD_DELIMITER: &str = ",";
/// Record terminator.
const RECORD_DELIMITER: &str = "\r\n";
/// Quote wrapped around every value.
const QUALIFIER: char = '"';

/// Wrap `value` in the qualifier, doubling any embedded qualifier.
fn qualify_value(value: &str) -> String {
    let escaped = value.replace(QUALIFIER, &format!("{QUALIFIER}{QUALIFIER}"));
    format!("{QUALIFIER}{escaped}{QUALIFIER}")
}

fn write_line(out: &mut String, values: impl IntoIterator<Item = impl AsRef<str>>) {
    let line = values
        .into_iter()
        .map(|v| qualify_value(v.as_ref()))
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER);
    out.push_str(&line);
    out.push_str(RECORD_DELIMITER);
}

/// What: Encode records as CSV text.
///
/// Inputs:
/// - `records`: Rows in output order
///
/// Output:
/// - Header line followed by one line per record; every value is double-quoted
///   and every line ends with CRLF.
#[must_use]
pub fn encode(records: &[&FlightRecord]) -> String {
    let mut out = String::new();
    write_line(&mut out, header_labels());
    for rec in records {
        write_line(&mut out, row_values(rec));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_records;

    #[test]
    /// What: Default CSV quotes every value and ends lines with CRLF
    ///
    /// - Input: First seed record
    /// - Output: Header line and the record line in field order
    fn encode_default_layout() {
        let seed = seed_records();
        let text = encode(&[&seed[0]]);
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[1],
            r#""1","6E 2045","Delhi","Mumbai","Daily","2025-08-01","06:00","08:00","Indigo","Available""#
        );
    }

    #[test]
    /// What: Embedded quotes are doubled and commas stay inside the quoted value
    ///
    /// - Input: Frequency containing quotes and a comma
    /// - Output: Escaped value; neighbouring fields unchanged
    fn encode_escapes_embedded_quotes() {
        let mut rec = seed_records().remove(1);
        rec.frequency = r#"Mon, "Wed""#.into();
        let text = encode(&[&rec]);
        assert!(text.contains(r#""Mon, ""Wed""""#));
        let line = text.split("\r\n").nth(1).expect("data line");
        assert!(line.starts_with(r#""2","UK 883","Bangalore","Pune","#));
        assert!(line.ends_with(r#","Vistara","Full""#));
    }
}
