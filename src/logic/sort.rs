use std::cmp::Ordering;

use crate::state::FlightRecord;
use crate::util::parse_date;

/// Sortable columns of the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on the flight number.
    FlightNumber,
    /// Chronological on the parsed effective date.
    EffectiveDate,
}

impl SortKey {
    /// Parse a sort key from its settings key or aliases (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "flight_number" | "flightnumber" | "flight_no" | "flight" => Some(Self::FlightNumber),
            "effective_date" | "effectivedate" | "effective" | "date" => Some(Self::EffectiveDate),
            _ => None,
        }
    }

    /// What: Compare two records on this column.
    ///
    /// Output:
    /// - Ascending ordering of `a` relative to `b`.
    ///
    /// Details:
    /// - Dates that do not parse order before every valid date.
    #[must_use]
    pub fn compare(self, a: &FlightRecord, b: &FlightRecord) -> Ordering {
        match self {
            Self::FlightNumber => a.flight_number.cmp(&b.flight_number),
            Self::EffectiveDate => {
                parse_date(&a.effective_date).cmp(&parse_date(&b.effective_date))
            }
        }
    }
}

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Single active sort: one column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column being sorted.
    pub key: SortKey,
    /// Direction applied to the column comparator.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Compare two records honoring the direction.
    #[must_use]
    pub fn compare(&self, a: &FlightRecord, b: &FlightRecord) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// What: Advance the sort state after a header activation on `key`.
///
/// Inputs:
/// - `current`: Active sort, if any
/// - `key`: Column the user activated
///
/// Output:
/// - Next sort state: a new column starts ascending; the same column goes
///   ascending → descending → unsorted.
#[must_use]
pub fn cycle_sort(current: Option<SortSpec>, key: SortKey) -> Option<SortSpec> {
    match current {
        Some(s) if s.key == key => match s.direction {
            SortDirection::Ascending => Some(SortSpec {
                key,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortSpec::ascending(key)),
    }
}

/// What: Order filtered rows in place.
///
/// Inputs:
/// - `rows`: Filtered view (never the store itself)
/// - `sort`: Active sort; `None` keeps filter order
///
/// Details:
/// - Uses a stable sort, so rows with equal keys keep their relative order.
pub fn sort_rows(rows: &mut [&FlightRecord], sort: Option<SortSpec>) {
    if let Some(spec) = sort {
        rows.sort_by(|a, b| spec.compare(a, b));
    }
}
