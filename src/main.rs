//! flightdesk binary entrypoint kept minimal. The runtime lives in the library's `app` module.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use flightdesk::args::{self, Args};
use flightdesk::controller::ScheduleController;
use flightdesk::{app, config, fixtures};

struct FlightdeskTimer;

impl tracing_subscriber::fmt::time::FormatTime for FlightdeskTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing into `<config>/logs/flightdesk.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("flightdesk.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FlightdeskTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FlightdeskTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = config::settings(args.config.as_deref());
    let store = match fixtures::load_store(args.fixture.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to load flight records");
            eprintln!("flightdesk: {e}");
            std::process::exit(1);
        }
    };
    let controller = ScheduleController::new(store, &settings);
    tracing::info!(
        records = controller.store().len(),
        headless = args.is_headless(),
        "flightdesk starting"
    );

    if args.is_headless() {
        if let Err(e) = args::run_headless(&args, &settings, controller) {
            tracing::error!(error = %e, "headless run failed");
            eprintln!("flightdesk: {e}");
            std::process::exit(2);
        }
        return;
    }

    if let Err(err) = app::run(controller, settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("flightdesk exited");
}
