//! Color palette and status/airline presentation helpers.

use std::sync::OnceLock;

use ratatui::style::Color;

use crate::state::{Airline, FlightStatus};

/// Application color palette (Catppuccin Mocha tones).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color behind the selected row.
    pub surface1: Color,
    /// Muted border color for unfocused blocks.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for hints and captions.
    pub subtext0: Color,
    /// Accent color for focus and selection.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Attention color for full flights.
    pub peach: Color,
    /// Warning color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for modal borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

impl Theme {
    /// What: Color of a status tag.
    ///
    /// Output:
    /// - Green for available, orange for full, red for cancelled.
    #[must_use]
    pub const fn status_color(&self, status: FlightStatus) -> Color {
        match status {
            FlightStatus::Available => self.green,
            FlightStatus::Full => self.peach,
            FlightStatus::Cancelled => self.red,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Process-wide palette.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Airline name prefixed with its badge, e.g. `🟦 Indigo`.
#[must_use]
pub fn airline_label(airline: Airline) -> String {
    format!("{} {}", airline.badge(), airline.as_str())
}
