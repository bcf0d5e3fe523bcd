//! Library entry for flightdesk exposing the schedule core for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod export;
pub mod fixtures;
pub mod logic;
pub mod state;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
