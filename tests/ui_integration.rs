//! Integration tests for the schedule screen rendering.
//!
//! Tests cover:
//! - Default render of the seeded schedule
//! - Empty state after a filter that matches nothing
//! - Edit form overlay
//! - Sort marker in the header

#![cfg(test)]

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use flightdesk::config::Settings;
use flightdesk::controller::ScheduleController;
use flightdesk::events::handle_event;
use flightdesk::fixtures::seed_records;
use flightdesk::state::AppState;
use flightdesk::store::RecordStore;
use flightdesk::ui;

/// What: Create a test terminal backend.
///
/// Output:
/// - `TestBackend` with 120x40 cells
fn create_test_backend() -> TestBackend {
    TestBackend::new(120, 40)
}

/// What: App state over the seeded schedule with default settings.
fn seeded_app() -> AppState {
    let settings = Settings::default();
    let store = RecordStore::from_records(seed_records()).expect("seed store");
    AppState::new(ScheduleController::new(store, &settings), &settings)
}

/// What: Render one frame and return the screen as text lines.
fn render_ui_to_lines(app: &mut AppState) -> Vec<String> {
    let mut terminal = Terminal::new(create_test_backend()).expect("failed to create terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw");
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_event(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)), app);
}

#[test]
/// What: Default screen lists every seeded flight
///
/// - Input: Seeded app, no filters
/// - Output: Table title, all three flight numbers and the page indicator are visible
fn ui_renders_seeded_schedule() {
    let mut app = seeded_app();
    let lines = render_ui_to_lines(&mut app);
    assert!(screen_contains(&lines, "Flight Schedule"));
    for flight in ["6E 2045", "UK 883", "AI 101"] {
        assert!(screen_contains(&lines, flight), "missing {flight}");
    }
    assert!(screen_contains(&lines, "Page 1/1"));
}

#[test]
/// What: A filter that matches nothing shows the empty message
///
/// - Input: Search text "ZZ"
/// - Output: Empty-state message, no seeded flight numbers
fn ui_renders_empty_state() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('Z'));
    press(&mut app, KeyCode::Char('Z'));
    let lines = render_ui_to_lines(&mut app);
    assert!(screen_contains(&lines, "No flights match the current filters"));
    assert!(!screen_contains(&lines, "UK 883"));
}

#[test]
/// What: Opening the edit form draws the overlay for the highlighted row
///
/// - Input: Enter on the first row
/// - Output: "Edit Flight #1" title and the staged flight number
fn ui_renders_edit_form() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Enter);
    let lines = render_ui_to_lines(&mut app);
    assert!(screen_contains(&lines, "Edit Flight #1"));
    assert!(screen_contains(&lines, "6E 2045"));
}

#[test]
/// What: Active sort shows its direction marker and reorders rows
///
/// - Input: `s` once (flight number ascending)
/// - Output: Ascending marker drawn; 6E 2045 is drawn above UK 883
fn ui_renders_sort_marker_and_order() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('s'));
    let lines = render_ui_to_lines(&mut app);
    assert!(screen_contains(&lines, "▲"));
    let row_of = |needle: &str| lines.iter().position(|l| l.contains(needle));
    assert!(row_of("6E 2045") < row_of("AI 101"));
    assert!(row_of("AI 101") < row_of("UK 883"));
}
