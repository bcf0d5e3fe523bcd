//! Small helpers shared by the logic, export and UI layers.

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// Format string of the canonical date form.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// What: Parse a canonical `YYYY-MM-DD` date.
///
/// Inputs:
/// - `s`: Date text; surrounding whitespace is ignored
///
/// Output:
/// - `Some(NaiveDate)` for a valid calendar date; `None` otherwise (including empty input).
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(t, CANONICAL_DATE_FORMAT).ok()
}

/// Format a date in canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date(d: NaiveDate) -> String {
    d.format(CANONICAL_DATE_FORMAT).to_string()
}

/// What: Pad or truncate `s` to exactly `width` terminal columns.
///
/// Inputs:
/// - `s`: Cell text (may contain wide characters such as emoji)
/// - `width`: Target display width
///
/// Output:
/// - String whose display width is `width`; truncated text ends with `…`.
#[must_use]
pub fn fit_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w <= width {
        let mut out = String::with_capacity(s.len() + width - w);
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', width - w));
        return out;
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > width - 1 {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}
