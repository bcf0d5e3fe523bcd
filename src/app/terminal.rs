use std::io::Stdout;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Terminal type the schedule screen draws into.
pub type ScheduleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// What: Switch the tty into raw mode on the alternate screen and build the ratatui terminal.
///
/// Output:
/// - Ready terminal; on failure the tty is restored before the error is returned.
pub fn open_terminal() -> Result<ScheduleTerminal> {
    enable_raw_mode()?;
    if let Err(e) = execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => Ok(t),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Leave the alternate screen and restore cooked mode.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
