//! flightdesk application module: terminal lifecycle and the event loop.

/// Runtime event loop and background producers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{Channels, run, run_event_loop};
pub use terminal::ScheduleTerminal;
