//! Authoritative in-memory list of flight records.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::state::{FlightRecord, RecordId};

/// Owns the canonical record list in insertion order.
///
/// Readers borrow the slice returned by [`RecordStore::all`]; the only
/// mutation is [`RecordStore::replace`], which swaps a whole record at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    /// Records in seed order.
    records: Vec<FlightRecord>,
}

impl RecordStore {
    /// What: Build a store from seed records.
    ///
    /// Inputs:
    /// - `records`: Seed records in display order
    ///
    /// Output:
    /// - `Ok(RecordStore)` when every id is unique; `Err(StoreError::DuplicateId)` otherwise.
    pub fn from_records(records: Vec<FlightRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for rec in &records {
            if !seen.insert(rec.id) {
                return Err(StoreError::DuplicateId(rec.id));
            }
        }
        tracing::debug!(count = records.len(), "[Store] Seeded records");
        Ok(Self { records })
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[FlightRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&FlightRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// What: Replace the record with `id` by `record`.
    ///
    /// Inputs:
    /// - `id`: Target record id
    /// - `record`: Full replacement record
    ///
    /// Output:
    /// - `Ok(())` after the swap; `Err(StoreError::NotFound)` when `id` is absent.
    ///
    /// Details:
    /// - The stored record always keeps `id`, whatever `record.id` says.
    /// - Nothing changes on error.
    pub fn replace(&mut self, id: RecordId, mut record: FlightRecord) -> Result<(), StoreError> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(%id, "[Store] Replace target not found");
            return Err(StoreError::NotFound(id));
        };
        record.id = id;
        *slot = record;
        tracing::info!(%id, "[Store] Record replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_records;

    #[test]
    /// What: Replacing an unknown id fails and leaves the store untouched
    ///
    /// - Input: Seeded store; replace id 42
    /// - Output: `NotFound(42)`; snapshot equal before and after
    fn replace_unknown_id_is_not_found_and_unchanged() {
        let mut store = RecordStore::from_records(seed_records()).expect("seed");
        let before = store.clone();
        let mut rec = store.all()[0].clone();
        rec.flight_number = "XX 1".into();
        let err = store.replace(RecordId(42), rec).expect_err("must fail");
        assert_eq!(err, StoreError::NotFound(RecordId(42)));
        assert_eq!(store, before);
    }

    #[test]
    /// What: Replace swaps the full record and pins the id
    ///
    /// - Input: Replacement for id 2 carrying a different id
    /// - Output: Record 2 holds new values, id stays 2, order unchanged
    fn replace_swaps_whole_record_and_keeps_id() {
        let mut store = RecordStore::from_records(seed_records()).expect("seed");
        let mut rec = store.all()[0].clone();
        rec.id = RecordId(99);
        store.replace(RecordId(2), rec.clone()).expect("replace");
        let got = store.get(RecordId(2)).expect("record 2");
        assert_eq!(got.flight_number, rec.flight_number);
        assert_eq!(got.id, RecordId(2));
        let ids: Vec<u64> = store.all().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.get(RecordId(99)).is_none());
    }

    #[test]
    /// What: Duplicate seed ids are rejected
    ///
    /// - Input: Seed with the first record repeated
    /// - Output: `DuplicateId(1)`
    fn duplicate_ids_rejected() {
        let mut seed = seed_records();
        seed.push(seed[0].clone());
        assert_eq!(
            RecordStore::from_records(seed),
            Err(StoreError::DuplicateId(RecordId(1)))
        );
    }
}
