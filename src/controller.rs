//! Schedule controller: the single owner of the record store and view state.
//!
//! Every callback recomputes the visible rows before returning, so readers
//! never observe a view that lags behind the store, the filters or the sort.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{EditError, ExportError, StoreError};
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::logic::edit::EditSession;
use crate::logic::filter::{DateRange, FilterOptions, FilterSpec};
use crate::logic::sort::{SortKey, SortSpec, cycle_sort, sort_rows};
use crate::state::{FieldName, FlightRecord, RecordId};
use crate::store::RecordStore;

/// Owns the store, filter/sort/page state and the edit session.
#[derive(Debug)]
pub struct ScheduleController {
    /// Canonical records.
    store: RecordStore,
    /// Active filters.
    filter: FilterSpec,
    /// Active sort, if any.
    sort: Option<SortSpec>,
    /// Origin/destination values offered to the filter UI.
    options: FilterOptions,
    /// Edit state machine.
    session: EditSession,
    /// Store indices of the visible rows, in display order.
    visible: Vec<usize>,
    /// Zero-based page index.
    page: usize,
    /// Rows per page (at least 1).
    page_size: usize,
    /// Whether new date ranges keep boundary dates.
    date_range_inclusive: bool,
    /// Incremented on every recompute.
    revision: u64,
}

impl ScheduleController {
    /// What: Create a controller over `store`.
    ///
    /// Inputs:
    /// - `store`: Seeded record store (moved in)
    /// - `settings`: Page size, initial sort and date-range policy
    ///
    /// Output:
    /// - Controller with the full store visible on page 0.
    #[must_use]
    pub fn new(store: RecordStore, settings: &Settings) -> Self {
        let options = FilterOptions::from_records(store.all());
        let mut ctl = Self {
            store,
            filter: FilterSpec::default(),
            sort: settings.initial_sort(),
            options,
            session: EditSession::default(),
            visible: Vec::new(),
            page: 0,
            page_size: settings.page_size.max(1),
            date_range_inclusive: settings.date_range_inclusive,
            revision: 0,
        };
        ctl.recompute();
        ctl
    }

    /// Filter, sort and clamp the page; bump the revision.
    fn recompute(&mut self) {
        let all = self.store.all();
        let mut rows: Vec<&FlightRecord> = all.iter().filter(|r| self.filter.matches(r)).collect();
        sort_rows(&mut rows, self.sort);
        // Ids are unique, so each visible row maps back to exactly one index.
        self.visible = rows
            .iter()
            .filter_map(|r| all.iter().position(|x| x.id == r.id))
            .collect();
        let last = self.page_count().saturating_sub(1);
        self.page = self.page.min(last);
        self.revision += 1;
        tracing::trace!(
            revision = self.revision,
            visible = self.visible.len(),
            page = self.page,
            "[View] Recomputed"
        );
    }

    /// Canonical record store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Active filters.
    #[must_use]
    pub const fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Active sort.
    #[must_use]
    pub const fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Values offered by the origin/destination filters.
    #[must_use]
    pub const fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current edit session.
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    /// Counter bumped every time the visible view is recomputed.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Zero-based current page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages (at least 1, even when nothing is visible).
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.visible.is_empty() {
            1
        } else {
            self.visible.len().div_ceil(self.page_size)
        }
    }

    /// Number of visible rows across all pages.
    #[must_use]
    pub const fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// All visible rows (filtered and sorted), across pages.
    #[must_use]
    pub fn visible(&self) -> Vec<&FlightRecord> {
        let all = self.store.all();
        self.visible.iter().map(|&i| &all[i]).collect()
    }

    /// Visible rows on the current page.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&FlightRecord> {
        let all = self.store.all();
        self.visible
            .iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .map(|&i| &all[i])
            .collect()
    }

    /// Date range between `start` and `end` honoring the configured boundary policy.
    #[must_use]
    pub const fn date_range(&self, start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange {
            start,
            end,
            inclusive: self.date_range_inclusive,
        }
    }

    /// What: Replace the active filters.
    ///
    /// Details:
    /// - Returns to the first page and recomputes the view.
    pub fn on_filter_changed(&mut self, spec: FilterSpec) {
        tracing::debug!(?spec, "[View] Filter changed");
        self.filter = spec;
        self.page = 0;
        self.recompute();
    }

    /// Cycle the sort on `key` (ascending → descending → none) and recompute.
    pub fn on_sort_requested(&mut self, key: SortKey) {
        self.set_sort(cycle_sort(self.sort, key));
    }

    /// Set the sort explicitly and recompute.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        tracing::debug!(?sort, "[View] Sort changed");
        self.sort = sort;
        self.page = 0;
        self.recompute();
    }

    /// Move to `page`, clamped to the last page.
    pub fn on_page_changed(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// What: Open record `id` in the edit session.
    ///
    /// Output:
    /// - `Err(StoreError::NotFound)` when the id is unknown; the session is unchanged.
    pub fn on_edit_requested(&mut self, id: RecordId) -> Result<(), StoreError> {
        let rec = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        self.session.begin(rec);
        Ok(())
    }

    /// Stage one field value in the open session.
    pub fn on_field_changed(&mut self, field: FieldName, value: &str) -> Result<(), EditError> {
        self.session.update_field(field, value)
    }

    /// What: Commit the open session into the store.
    ///
    /// Output:
    /// - Id of the updated record. On error the store and view are unchanged.
    ///
    /// Details:
    /// - Filter options are recomputed from the new store contents before the view.
    pub fn on_commit(&mut self) -> Result<RecordId, EditError> {
        let id = self.session.commit(&mut self.store)?;
        self.refresh_filter_options();
        self.recompute();
        Ok(id)
    }

    /// Discard the open session.
    pub fn on_cancel(&mut self) -> Result<(), EditError> {
        self.session.cancel()
    }

    /// Recompute origin/destination filter options from the store.
    pub fn refresh_filter_options(&mut self) {
        self.options = FilterOptions::from_records(self.store.all());
    }

    /// What: Serialize every visible row (all pages) in display order.
    ///
    /// Inputs:
    /// - `format`: Export format
    /// - `file_stem`: File name without extension
    ///
    /// Output:
    /// - Encoded artifact; writing it is left to the caller.
    pub fn on_export_requested(
        &self,
        format: ExportFormat,
        file_stem: &str,
    ) -> Result<ExportArtifact, ExportError> {
        let rows = self.visible();
        tracing::info!(rows = rows.len(), format = format.extension(), "[Export] Requested");
        export::export(&rows, format, file_stem)
    }
}
