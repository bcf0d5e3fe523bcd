use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::background::{spawn_event_thread, spawn_tick_worker};

/// What: Receivers drained by the main event loop.
///
/// Details:
/// - The senders live in the input thread and the tick worker; once both are
///   gone the loop sees closed channels and exits.
pub struct Channels {
    /// Terminal input events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Periodic ticks for toast expiry.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

impl Channels {
    /// What: Create the channels and start their producers.
    ///
    /// Inputs:
    /// - `headless`: When `true` no producer is started and both channels start closed
    ///
    /// Output:
    /// - Receivers for the event loop.
    pub fn new(headless: bool) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        spawn_event_thread(headless, event_tx, event_thread_cancelled.clone());
        spawn_tick_worker(headless, tick_tx);
        Self {
            event_rx,
            tick_rx,
            event_thread_cancelled,
        }
    }

    /// What: Channels that replay `events` and then close.
    ///
    /// Inputs:
    /// - `events`: Input sequence delivered in order
    ///
    /// Output:
    /// - Receivers with the events queued and no live senders.
    #[must_use]
    pub fn scripted(events: Vec<CEvent>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (_, tick_rx) = mpsc::unbounded_channel();
        for ev in events {
            let _ = event_tx.send(ev);
        }
        Self {
            event_rx,
            tick_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}
