//! Translate filter and sort flags into controller calls.

use crate::controller::ScheduleController;
use crate::error::CliError;
use crate::logic::{DateRange, FilterSpec, SortDirection, SortKey, SortSpec};
use crate::util::parse_date;

use super::Args;

fn parse_flag_date(flag: &'static str, value: &str) -> Result<chrono::NaiveDate, CliError> {
    parse_date(value).ok_or_else(|| CliError::InvalidDate {
        flag,
        value: value.to_string(),
    })
}

/// What: Build the filter described by the command line.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `ctl`: Controller supplying the configured date boundary policy
///
/// Output:
/// - Filter spec, or a [`CliError`] for malformed dates.
///
/// Details:
/// - `--inclusive` keeps boundary dates even when settings default to exclusive.
pub fn filter_from_args(args: &Args, ctl: &ScheduleController) -> Result<FilterSpec, CliError> {
    let date_range = match (args.from.as_deref(), args.to.as_deref()) {
        (None, None) => None,
        (Some(from), Some(to)) => {
            let start = parse_flag_date("from", from)?;
            let end = parse_flag_date("to", to)?;
            let range = ctl.date_range(start, end);
            Some(DateRange {
                inclusive: range.inclusive || args.inclusive,
                ..range
            })
        }
        _ => return Err(CliError::IncompleteDateRange),
    };
    Ok(FilterSpec {
        flight_number: args.flight.clone().filter(|s| !s.is_empty()),
        origins: args.origin.clone(),
        destinations: args.destination.clone(),
        date_range,
    })
}

/// What: Parse `--sort`/`--desc`.
///
/// Output:
/// - `Ok(None)` when `--sort` is absent; `Err(UnknownSortKey)` for unknown keys.
pub fn sort_from_args(args: &Args) -> Result<Option<SortSpec>, CliError> {
    let Some(raw) = args.sort.as_deref() else {
        return Ok(None);
    };
    let key = SortKey::from_config_key(raw).ok_or_else(|| CliError::UnknownSortKey(raw.into()))?;
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    Ok(Some(SortSpec { key, direction }))
}

/// Apply filter and sort flags to `ctl`; a missing `--sort` keeps the settings default.
pub fn apply_view_args(args: &Args, ctl: &mut ScheduleController) -> Result<(), CliError> {
    let filter = filter_from_args(args, ctl)?;
    if let Some(sort) = sort_from_args(args)? {
        ctl.set_sort(Some(sort));
    }
    ctl.on_filter_changed(filter);
    Ok(())
}
