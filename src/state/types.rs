//! Core value types used by flightdesk state.

use std::fmt;
use std::str::FromStr;

/// Stable identifier of a flight record.
///
/// Assigned by the seed fixture and never changed afterwards; the store
/// rejects fixtures that reuse an id.
///
/// Deserializes from a number or a numeric string (`7` or `"7"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }
        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(Self(n)),
            RawId::Text(s) => s.trim().parse().map(Self).map_err(|_| {
                serde::de::Error::custom(format!("record id {s:?} is not a non-negative integer"))
            }),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Carriers known to the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Airline {
    /// `IndiGo` (6E).
    Indigo,
    /// Vistara (UK).
    Vistara,
    /// Air India (AI).
    AirIndia,
}

impl Airline {
    /// Every carrier in display order.
    pub const ALL: [Self; 3] = [Self::Indigo, Self::Vistara, Self::AirIndia];

    /// Canonical name used in fixtures, exports and the edit form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indigo => "Indigo",
            Self::Vistara => "Vistara",
            Self::AirIndia => "AirIndia",
        }
    }

    /// Small colored marker rendered in front of the carrier name.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Indigo => "🟦",
            Self::Vistara => "🟪",
            Self::AirIndia => "🔴",
        }
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Airline {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "indigo" | "6e" => Ok(Self::Indigo),
            "vistara" | "uk" => Ok(Self::Vistara),
            "airindia" | "ai" => Ok(Self::AirIndia),
            _ => Err(()),
        }
    }
}

/// Seat availability of a scheduled flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FlightStatus {
    /// Seats can still be booked.
    Available,
    /// Sold out.
    Full,
    /// Flight will not operate.
    Cancelled,
}

impl FlightStatus {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Full, Self::Cancelled];

    /// Canonical name used in fixtures, exports and the edit form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Full => "Full",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "full" => Ok(Self::Full),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// One flight-schedule entry.
///
/// Field order is the declaration order used for export columns. Serde
/// aliases accept the short keys of older fixture files (`flightNo`,
/// `effective`, `departure`, `arrival`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Stable unique identifier.
    #[serde(alias = "key")]
    pub id: RecordId,
    /// Marketing flight number, e.g. `6E 2045`.
    #[serde(alias = "flightNo")]
    pub flight_number: String,
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Free-text recurrence, e.g. `Mon/Wed/Fri`.
    #[serde(default)]
    pub frequency: String,
    /// First day the schedule applies, canonical `YYYY-MM-DD`.
    #[serde(alias = "effective")]
    pub effective_date: String,
    /// Local departure time, free text.
    #[serde(default, alias = "departure")]
    pub departure_time: String,
    /// Local arrival time, free text.
    #[serde(default, alias = "arrival")]
    pub arrival_time: String,
    /// Operating carrier.
    pub airline: Airline,
    /// Current availability.
    pub status: FlightStatus,
}

/// Editable field of a [`FlightRecord`], in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    /// [`FlightRecord::flight_number`]
    FlightNumber,
    /// [`FlightRecord::origin`]
    Origin,
    /// [`FlightRecord::destination`]
    Destination,
    /// [`FlightRecord::frequency`]
    Frequency,
    /// [`FlightRecord::effective_date`]
    EffectiveDate,
    /// [`FlightRecord::departure_time`]
    DepartureTime,
    /// [`FlightRecord::arrival_time`]
    ArrivalTime,
    /// [`FlightRecord::airline`]
    Airline,
    /// [`FlightRecord::status`]
    Status,
}

impl FieldName {
    /// Every editable field in form order.
    pub const ALL: [Self; 9] = [
        Self::FlightNumber,
        Self::Origin,
        Self::Destination,
        Self::Frequency,
        Self::EffectiveDate,
        Self::DepartureTime,
        Self::ArrivalTime,
        Self::Airline,
        Self::Status,
    ];

    /// Human-readable label shown in the form and used as export header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlightNumber => "Flight No.",
            Self::Origin => "Origin",
            Self::Destination => "Destination",
            Self::Frequency => "Frequency",
            Self::EffectiveDate => "Effective",
            Self::DepartureTime => "Departure",
            Self::ArrivalTime => "Arrival",
            Self::Airline => "Airline",
            Self::Status => "Status",
        }
    }

    /// Machine key (camelCase) matching the serialized record field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FlightNumber => "flightNumber",
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Frequency => "frequency",
            Self::EffectiveDate => "effectiveDate",
            Self::DepartureTime => "departureTime",
            Self::ArrivalTime => "arrivalTime",
            Self::Airline => "airline",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which part of the screen currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Row navigation in the schedule table.
    #[default]
    Table,
    /// Flight-number search box.
    Search,
    /// Origin filter selector.
    Origin,
    /// Destination filter selector.
    Destination,
    /// Start of the effective-date window.
    DateFrom,
    /// End of the effective-date window.
    DateTo,
}

impl Focus {
    /// Next focus target in Tab order, wrapping back to the table.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Table => Self::Search,
            Self::Search => Self::Origin,
            Self::Origin => Self::Destination,
            Self::Destination => Self::DateFrom,
            Self::DateFrom => Self::DateTo,
            Self::DateTo => Self::Table,
        }
    }

    /// Previous focus target (Shift+Tab).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Table => Self::DateTo,
            Self::Search => Self::Table,
            Self::Origin => Self::Search,
            Self::Destination => Self::Origin,
            Self::DateFrom => Self::Destination,
            Self::DateTo => Self::DateFrom,
        }
    }
}
