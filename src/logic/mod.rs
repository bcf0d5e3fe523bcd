//! Core non-UI logic: filtering, sorting and the edit session.

pub mod edit;
pub mod filter;
pub mod sort;

pub use edit::{EditSession, REQUIRED_FIELDS, StagedFields};
pub use filter::{DateRange, FilterOptions, FilterSpec, apply_filters};
pub use sort::{SortDirection, SortKey, SortSpec, cycle_sort, sort_rows};
