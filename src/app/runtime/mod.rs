use crate::config::Settings;
use crate::controller::ScheduleController;
use crate::state::AppState;

use super::terminal::{open_terminal, restore_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;

pub use channels::Channels;
pub use event_loop::run_event_loop;

use cleanup::cleanup_on_exit;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the flightdesk TUI end-to-end.
///
/// Inputs:
/// - `controller`: Seeded schedule controller (moved into the UI state)
/// - `settings`: Loaded settings (export defaults, locations)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - `FLIGHTDESK_TEST_HEADLESS=1` skips terminal setup and input; the loop
///   then exits as soon as its channels report closed.
/// - The terminal is restored even when the loop ends on an error path.
pub async fn run(controller: ScheduleController, settings: Settings) -> Result<()> {
    let headless = std::env::var("FLIGHTDESK_TEST_HEADLESS").ok().as_deref() == Some("1");
    let mut terminal = if headless {
        None
    } else {
        Some(open_terminal()?)
    };

    let mut app = AppState::new(controller, &settings);
    let mut channels = Channels::new(headless);
    tracing::info!(
        headless,
        records = app.controller.store().len(),
        "[Runtime] Event loop starting"
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;
    cleanup_on_exit(&mut app, &channels);

    if terminal.is_some() {
        restore_terminal()?;
    }
    Ok(())
}
