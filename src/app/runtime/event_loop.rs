use std::time::Instant;

use tokio::select;

use crate::app::terminal::ScheduleTerminal;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Wait for one message and apply it.
///
/// Output:
/// - `true` when the loop should exit (quit key or all producers gone).
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => crate::events::handle_event(ev, app),
        Some(()) = channels.tick_rx.recv() => {
            app.expire_toast(Instant::now());
            false
        }
        else => true,
    }
}

/// What: Run the main event loop, rendering a frame before every message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Input and tick receivers
///
/// Details:
/// - Returns when an event handler requests exit or both channels are closed.
pub async fn run_event_loop(
    terminal: &mut Option<ScheduleTerminal>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] Frame draw failed");
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
