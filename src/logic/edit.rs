//! Edit session: stage field changes for one record and commit them atomically.

use chrono::NaiveDate;

use crate::error::EditError;
use crate::state::{Airline, FieldName, FlightRecord, FlightStatus, RecordId};
use crate::store::RecordStore;
use crate::util::{format_date, parse_date};

/// Fields that must be non-empty for a commit to succeed.
pub const REQUIRED_FIELDS: [FieldName; 4] = [
    FieldName::FlightNumber,
    FieldName::Origin,
    FieldName::Destination,
    FieldName::EffectiveDate,
];

/// In-progress values of the record being edited.
///
/// Mirrors [`FlightRecord`] except that the effective date is held as a
/// calendar date (`None` when empty or when the stored text did not parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFields {
    /// Staged flight number.
    pub flight_number: String,
    /// Staged origin.
    pub origin: String,
    /// Staged destination.
    pub destination: String,
    /// Staged frequency.
    pub frequency: String,
    /// Staged effective date.
    pub effective_date: Option<NaiveDate>,
    /// Staged departure time.
    pub departure_time: String,
    /// Staged arrival time.
    pub arrival_time: String,
    /// Staged carrier.
    pub airline: Airline,
    /// Staged status.
    pub status: FlightStatus,
}

impl StagedFields {
    /// Copy a record's values into a staging area.
    #[must_use]
    pub fn from_record(rec: &FlightRecord) -> Self {
        Self {
            flight_number: rec.flight_number.clone(),
            origin: rec.origin.clone(),
            destination: rec.destination.clone(),
            frequency: rec.frequency.clone(),
            effective_date: parse_date(&rec.effective_date),
            departure_time: rec.departure_time.clone(),
            arrival_time: rec.arrival_time.clone(),
            airline: rec.airline,
            status: rec.status,
        }
    }

    /// Display text of a staged field, as the form shows it.
    #[must_use]
    pub fn value(&self, field: FieldName) -> String {
        match field {
            FieldName::FlightNumber => self.flight_number.clone(),
            FieldName::Origin => self.origin.clone(),
            FieldName::Destination => self.destination.clone(),
            FieldName::Frequency => self.frequency.clone(),
            FieldName::EffectiveDate => self.effective_date.map(format_date).unwrap_or_default(),
            FieldName::DepartureTime => self.departure_time.clone(),
            FieldName::ArrivalTime => self.arrival_time.clone(),
            FieldName::Airline => self.airline.to_string(),
            FieldName::Status => self.status.to_string(),
        }
    }

    /// What: Store `value` into `field`.
    ///
    /// Output:
    /// - `Err(EditError::InvalidValue)` when an airline, status or date does not parse;
    ///   the staged value is left as it was.
    ///
    /// Details:
    /// - An empty date clears the staged date (caught later by validation).
    fn set(&mut self, field: FieldName, value: &str) -> Result<(), EditError> {
        let invalid = || EditError::InvalidValue {
            field,
            value: value.to_string(),
        };
        match field {
            FieldName::FlightNumber => self.flight_number = value.to_string(),
            FieldName::Origin => self.origin = value.to_string(),
            FieldName::Destination => self.destination = value.to_string(),
            FieldName::Frequency => self.frequency = value.to_string(),
            FieldName::EffectiveDate => {
                if value.trim().is_empty() {
                    self.effective_date = None;
                } else {
                    self.effective_date = Some(parse_date(value).ok_or_else(invalid)?);
                }
            }
            FieldName::DepartureTime => self.departure_time = value.to_string(),
            FieldName::ArrivalTime => self.arrival_time = value.to_string(),
            FieldName::Airline => self.airline = value.parse().map_err(|()| invalid())?,
            FieldName::Status => self.status = value.parse().map_err(|()| invalid())?,
        }
        Ok(())
    }

    /// Required fields that are currently empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<FieldName> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|f| match f {
                FieldName::EffectiveDate => self.effective_date.is_none(),
                other => self.value(*other).trim().is_empty(),
            })
            .collect()
    }

    /// Build the committed record; the date goes back to canonical text.
    fn into_record(self, id: RecordId) -> FlightRecord {
        FlightRecord {
            id,
            flight_number: self.flight_number,
            origin: self.origin,
            destination: self.destination,
            frequency: self.frequency,
            effective_date: self.effective_date.map(format_date).unwrap_or_default(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            airline: self.airline,
            status: self.status,
        }
    }
}

/// Edit state machine: `Idle` or editing exactly one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No record is being edited.
    #[default]
    Idle,
    /// Record `id` is open with `staged` values.
    Editing {
        /// Record being edited.
        id: RecordId,
        /// Uncommitted values.
        staged: StagedFields,
    },
}

impl EditSession {
    /// Whether a record is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Id of the open record, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<RecordId> {
        match self {
            Self::Idle => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }

    /// Staged values of the open record, if any.
    #[must_use]
    pub const fn staged(&self) -> Option<&StagedFields> {
        match self {
            Self::Idle => None,
            Self::Editing { staged, .. } => Some(staged),
        }
    }

    /// What: Open `record` for editing.
    ///
    /// Details:
    /// - When another record is already open its staged values are discarded
    ///   first (implicit cancel); the store is never touched.
    pub fn begin(&mut self, record: &FlightRecord) {
        if let Self::Editing { id, .. } = self {
            tracing::info!(previous = %id, next = %record.id, "[Edit] Implicitly cancelling open session");
        }
        *self = Self::Editing {
            id: record.id,
            staged: StagedFields::from_record(record),
        };
        tracing::debug!(id = %record.id, "[Edit] Session started");
    }

    /// What: Change one staged field.
    ///
    /// Output:
    /// - `Err(InvalidTransition)` when idle; `Err(InvalidValue)` when the value
    ///   does not parse for the field. The session is unchanged on error.
    pub fn update_field(&mut self, field: FieldName, value: &str) -> Result<(), EditError> {
        let Self::Editing { staged, .. } = self else {
            tracing::warn!(%field, "[Edit] update_field while idle");
            return Err(EditError::InvalidTransition {
                op: "update a field",
                state: "idle",
            });
        };
        staged.set(field, value)
    }

    /// What: Validate and write the staged record into `store`.
    ///
    /// Inputs:
    /// - `store`: Record store receiving the replacement
    ///
    /// Output:
    /// - `Ok(id)` of the committed record; the session is `Idle` afterwards.
    /// - `Err(ValidationFailed)` listing empty required fields, or `Err(Store)`
    ///   when the store rejects the replace; the session stays open and the
    ///   store is unchanged.
    /// - `Err(InvalidTransition)` when idle.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<RecordId, EditError> {
        let Self::Editing { id, staged } = self else {
            tracing::warn!("[Edit] commit while idle");
            return Err(EditError::InvalidTransition {
                op: "commit",
                state: "idle",
            });
        };
        let missing = staged.missing_required();
        if !missing.is_empty() {
            tracing::debug!(id = %id, ?missing, "[Edit] Validation failed");
            return Err(EditError::ValidationFailed(missing));
        }
        if staged.origin == staged.destination {
            tracing::warn!(id = %id, city = %staged.origin, "[Edit] Origin equals destination");
        }
        let id = *id;
        store.replace(id, staged.clone().into_record(id))?;
        *self = Self::Idle;
        tracing::info!(%id, "[Edit] Committed");
        Ok(id)
    }

    /// What: Discard staged values and return to `Idle`.
    ///
    /// Output:
    /// - `Err(InvalidTransition)` when already idle.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        let Self::Editing { id, .. } = self else {
            return Err(EditError::InvalidTransition {
                op: "cancel",
                state: "idle",
            });
        };
        tracing::debug!(id = %id, "[Edit] Cancelled");
        *self = Self::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_records;

    fn store() -> RecordStore {
        RecordStore::from_records(seed_records()).expect("seed")
    }

    #[test]
    /// What: Editing status and committing replaces only that field
    ///
    /// - Input: begin(1), status=Cancelled, commit
    /// - Output: Record 1 cancelled, other fields equal, session idle
    fn commit_applies_status_change() {
        let mut store = store();
        let before = store.get(RecordId(1)).cloned().expect("record 1");
        let mut session = EditSession::default();
        session.begin(&before);
        session
            .update_field(FieldName::Status, "Cancelled")
            .expect("status parses");
        assert_eq!(session.commit(&mut store), Ok(RecordId(1)));
        let after = store.get(RecordId(1)).expect("record 1");
        assert_eq!(after.status, FlightStatus::Cancelled);
        assert_eq!(
            FlightRecord {
                status: before.status,
                ..after.clone()
            },
            before
        );
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    /// What: Empty flight number fails validation without touching the store
    ///
    /// - Input: begin(2), flightNumber="", commit
    /// - Output: ValidationFailed([FlightNumber]); store equal; still editing
    fn commit_rejects_empty_flight_number() {
        let mut store = store();
        let snapshot = store.clone();
        let mut session = EditSession::default();
        session.begin(&store.all()[1].clone());
        session
            .update_field(FieldName::FlightNumber, "")
            .expect("text field");
        assert_eq!(
            session.commit(&mut store),
            Err(EditError::ValidationFailed(vec![FieldName::FlightNumber]))
        );
        assert_eq!(store, snapshot);
        assert_eq!(session.editing_id(), Some(RecordId(2)));
    }

    #[test]
    /// What: Every empty required field is reported, whitespace counts as empty
    ///
    /// - Input: Blank origin, whitespace destination, cleared date
    /// - Output: ValidationFailed lists them in form order
    fn commit_reports_all_missing_fields() {
        let mut store = store();
        let mut session = EditSession::default();
        session.begin(&store.all()[0].clone());
        session.update_field(FieldName::Origin, "").expect("origin");
        session
            .update_field(FieldName::Destination, "  ")
            .expect("destination");
        session
            .update_field(FieldName::EffectiveDate, "")
            .expect("clear date");
        assert_eq!(
            session.commit(&mut store),
            Err(EditError::ValidationFailed(vec![
                FieldName::Origin,
                FieldName::Destination,
                FieldName::EffectiveDate,
            ]))
        );
    }

    #[test]
    /// What: Cancel discards staged edits and never mutates the store
    ///
    /// - Input: Many staged edits, then cancel
    /// - Output: Store equal to snapshot; session idle
    fn cancel_never_mutates_store() {
        let store = store();
        let snapshot = store.clone();
        let mut session = EditSession::default();
        session.begin(&store.all()[2].clone());
        session.update_field(FieldName::FlightNumber, "ZZ 9").expect("fn");
        session.update_field(FieldName::Airline, "Indigo").expect("airline");
        session
            .update_field(FieldName::EffectiveDate, "2030-01-01")
            .expect("date");
        assert_eq!(session.cancel(), Ok(()));
        assert_eq!(session, EditSession::Idle);
        assert_eq!(store, snapshot);
    }

    #[test]
    /// What: Operations from Idle are rejected and leave state alone
    ///
    /// - Input: update_field/commit/cancel on an idle session
    /// - Output: InvalidTransition each time; store unchanged
    fn idle_operations_are_invalid_transitions() {
        let mut store = store();
        let snapshot = store.clone();
        let mut session = EditSession::default();
        assert!(matches!(
            session.update_field(FieldName::Status, "Full"),
            Err(EditError::InvalidTransition { state: "idle", .. })
        ));
        assert!(matches!(
            session.commit(&mut store),
            Err(EditError::InvalidTransition { op: "commit", .. })
        ));
        assert!(matches!(
            session.cancel(),
            Err(EditError::InvalidTransition { op: "cancel", .. })
        ));
        assert_eq!(session, EditSession::Idle);
        assert_eq!(store, snapshot);
    }

    #[test]
    /// What: Re-beginning while editing discards the previous staging
    ///
    /// - Input: begin(1), stage flight number, begin(2)
    /// - Output: Editing record 2 with its own values
    fn begin_while_editing_cancels_previous() {
        let store = store();
        let mut session = EditSession::default();
        session.begin(&store.all()[0].clone());
        session.update_field(FieldName::FlightNumber, "XX").expect("fn");
        session.begin(&store.all()[1].clone());
        assert_eq!(session.editing_id(), Some(RecordId(2)));
        assert_eq!(
            session.staged().map(|s| s.flight_number.as_str()),
            Some("UK 883")
        );
    }

    #[test]
    /// What: Dates convert at begin and commit; bad values are rejected
    ///
    /// - Input: begin(1); invalid date and airline; valid new date
    /// - Output: Staged NaiveDate; InvalidValue keeps old value; canonical text stored
    fn date_conversion_and_invalid_values() {
        let mut store = store();
        let mut session = EditSession::default();
        session.begin(&store.all()[0].clone());
        assert_eq!(
            session.staged().and_then(|s| s.effective_date),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
        assert!(matches!(
            session.update_field(FieldName::EffectiveDate, "Aug 9"),
            Err(EditError::InvalidValue {
                field: FieldName::EffectiveDate,
                ..
            })
        ));
        assert!(session.update_field(FieldName::Airline, "Emirates").is_err());
        assert_eq!(
            session.staged().map(|s| s.airline),
            Some(Airline::Indigo)
        );
        session
            .update_field(FieldName::EffectiveDate, "2025-09-07")
            .expect("date");
        session.commit(&mut store).expect("commit");
        assert_eq!(store.all()[0].effective_date, "2025-09-07");
    }

    #[test]
    /// What: Commit surfaces NotFound when the record vanished and stays editing
    ///
    /// - Input: Session opened on a record not in the store
    /// - Output: Err(Store(NotFound)); session still editing
    fn commit_to_missing_record_is_store_error() {
        let mut store = store();
        let mut ghost = store.all()[0].clone();
        ghost.id = RecordId(77);
        let mut session = EditSession::default();
        session.begin(&ghost);
        assert_eq!(
            session.commit(&mut store),
            Err(EditError::Store(crate::error::StoreError::NotFound(
                RecordId(77)
            )))
        );
        assert!(session.is_editing());
    }
}
