//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
/// - `FLIGHTDESK_TRACE=1` enables TRACE level, which includes every view recompute.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("FLIGHTDESK_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Verbose wins over the explicit level
    ///
    /// - Input: `--log-level warn` with and without `--verbose`
    /// - Output: "debug" when verbose, otherwise "warn"
    fn verbose_overrides_level() {
        let _guard = crate::config::test_mutex().lock().unwrap();
        let mut args = Args {
            log_level: "warn".into(),
            ..Args::default()
        };
        unsafe { std::env::remove_var("FLIGHTDESK_TRACE") };
        assert_eq!(determine_log_level(&args), "warn");
        args.verbose = true;
        assert_eq!(determine_log_level(&args), "debug");
    }
}
