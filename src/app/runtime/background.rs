use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between ticks sent to the event loop.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// How long the input thread blocks in `poll` before re-checking cancellation.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// What: Spawn the thread that forwards terminal input to the event loop.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (the sender is dropped)
/// - `event_tx`: Channel receiving crossterm events
/// - `cancelled`: Set by the runtime on exit
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
/// - Exits when the receiver is dropped; transient read errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(POLL_TIMEOUT) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("[Runtime] Input thread stopped");
    });
}

/// What: Spawn the tick worker.
///
/// Inputs:
/// - `headless`: Skip the worker (the sender is dropped)
/// - `tick_tx`: Channel receiving a unit per tick
///
/// Details:
/// - Stops once the event loop has dropped the receiver.
pub fn spawn_tick_worker(headless: bool, tick_tx: mpsc::UnboundedSender<()>) {
    if headless {
        return;
    }
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
