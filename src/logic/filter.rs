use chrono::NaiveDate;

use crate::state::FlightRecord;
use crate::util::parse_date;

/// Effective-date window applied to the schedule.
///
/// Boundaries are exclusive unless `inclusive` is set: with the default, a
/// record dated exactly `start` or `end` is filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First boundary date.
    pub start: NaiveDate,
    /// Second boundary date.
    pub end: NaiveDate,
    /// Whether records on a boundary date are kept.
    pub inclusive: bool,
}

impl DateRange {
    /// Exclusive range between `start` and `end`.
    #[must_use]
    pub const fn exclusive(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            inclusive: false,
        }
    }

    /// Whether `date` lies inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.inclusive {
            date >= self.start && date <= self.end
        } else {
            date > self.start && date < self.end
        }
    }
}

/// Combined set of active filter predicates. `Default` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring searched in the flight number.
    pub flight_number: Option<String>,
    /// Accepted origins; empty accepts all.
    pub origins: Vec<String>,
    /// Accepted destinations; empty accepts all.
    pub destinations: Vec<String>,
    /// Effective-date window; `None` accepts all.
    pub date_range: Option<DateRange>,
}

impl FilterSpec {
    /// What: Test a single record against every active predicate.
    ///
    /// Inputs:
    /// - `rec`: Record to test
    ///
    /// Output:
    /// - `true` when all active predicates accept the record.
    ///
    /// Details:
    /// - The flight-number query is matched as typed; surrounding spaces are significant.
    /// - A record whose stored date does not parse never matches an active date range.
    #[must_use]
    pub fn matches(&self, rec: &FlightRecord) -> bool {
        if let Some(q) = self.flight_number.as_deref()
            && !rec.flight_number.to_lowercase().contains(&q.to_lowercase())
        {
            return false;
        }
        if !self.origins.is_empty() && !self.origins.iter().any(|o| *o == rec.origin) {
            return false;
        }
        if !self.destinations.is_empty() && !self.destinations.iter().any(|d| *d == rec.destination)
        {
            return false;
        }
        if let Some(range) = &self.date_range {
            return parse_date(&rec.effective_date).is_some_and(|d| range.contains(d));
        }
        true
    }
}

/// What: Derive the visible subset of `records` for `spec`.
///
/// Inputs:
/// - `records`: Full record sequence in store order
/// - `spec`: Active filters
///
/// Output:
/// - Matching records in their original relative order.
#[must_use]
pub fn apply_filters<'a>(records: &'a [FlightRecord], spec: &FilterSpec) -> Vec<&'a FlightRecord> {
    records.iter().filter(|r| spec.matches(r)).collect()
}

/// Values offered by the origin/destination column filters.
///
/// Derived from the records present when [`FilterOptions::from_records`] ran;
/// it is not updated until recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct origins in first-appearance order.
    pub origins: Vec<String>,
    /// Distinct destinations in first-appearance order.
    pub destinations: Vec<String>,
}

impl FilterOptions {
    /// Collect distinct origin and destination values from `records`.
    #[must_use]
    pub fn from_records(records: &[FlightRecord]) -> Self {
        let mut out = Self::default();
        for r in records {
            if !out.origins.contains(&r.origin) {
                out.origins.push(r.origin.clone());
            }
            if !out.destinations.contains(&r.destination) {
                out.destinations.push(r.destination.clone());
            }
        }
        out
    }
}
