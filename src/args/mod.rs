//! Command-line argument parsing and the headless print/export modes.

pub mod definition;
pub mod export;
pub mod print;
pub mod utils;
pub mod view;

use crate::config::Settings;
use crate::controller::ScheduleController;
use crate::error::CliError;

pub use definition::Args;
pub use utils::determine_log_level;

/// What: Run `--print` and/or `--export` without starting the TUI.
///
/// Inputs:
/// - `args`: Parsed arguments (filters, sort, output options)
/// - `settings`: Loaded settings
/// - `ctl`: Seeded controller
///
/// Output:
/// - `Ok(())` after printing and/or exporting; `Err` on invalid flags or export failure.
///
/// Details:
/// - Filters and sort go through the same controller callbacks the TUI uses.
pub fn run_headless(
    args: &Args,
    settings: &Settings,
    mut ctl: ScheduleController,
) -> Result<(), CliError> {
    view::apply_view_args(args, &mut ctl)?;
    tracing::info!(rows = ctl.visible_len(), "[CLI] Headless view ready");
    if args.print {
        print!("{}", print::format_table(&ctl.visible()));
    }
    if args.export {
        let path = export::handle_export(args, settings, &ctl)?;
        println!("Exported {} rows to {}", ctl.visible_len(), path.display());
    }
    Ok(())
}
