use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Stop background producers and log the final view state.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Channels whose input thread is signalled to stop
///
/// Details:
/// - An edit left open at exit is discarded; records only change on commit.
pub fn cleanup_on_exit(app: &mut AppState, channels: &Channels) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if let Some(id) = app.controller.session().editing_id() {
        tracing::info!(%id, "[Runtime] Discarding open edit on exit");
        let _ = app.controller.on_cancel();
    }
    tracing::debug!(
        records = app.controller.store().len(),
        visible = app.controller.visible_len(),
        revision = app.controller.revision(),
        "[Runtime] Main loop exited"
    );
}
