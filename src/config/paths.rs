use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG config base.
const APP_DIR: &str = "flightdesk";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory: `$XDG_CONFIG_HOME/flightdesk`, else `$HOME/.config/flightdesk`.
/// Ensures it exists.
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default settings file path: `<config_dir>/settings.toml`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// What: Resolve the directory exports are written to.
///
/// Inputs:
/// - `configured`: `export_dir` from settings, if any
///
/// Output:
/// - The configured directory with a leading `~` expanded, or the current directory.
pub fn export_dir(configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(p) => {
            if let Ok(rest) = p.strip_prefix("~")
                && let Ok(home) = env::var("HOME")
            {
                return Path::new(&home).join(rest);
            }
            p.to_path_buf()
        }
        None => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Config, logs and settings paths live under `XDG_CONFIG_HOME/flightdesk`
    ///
    /// - Input: Temporary `XDG_CONFIG_HOME`
    /// - Output: Paths end with the expected segments and directories exist
    fn paths_config_logs_settings_under_xdg() {
        let _guard = crate::config::test_mutex().lock().unwrap();
        let orig = env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().unwrap();
        unsafe { env::set_var("XDG_CONFIG_HOME", base.path()) };
        let cfg = config_dir();
        let logs = logs_dir();
        let settings = settings_path();
        assert!(cfg.ends_with("flightdesk"));
        assert!(cfg.is_dir());
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert!(settings.ends_with("flightdesk/settings.toml"));
        unsafe {
            if let Some(v) = orig {
                env::set_var("XDG_CONFIG_HOME", v);
            } else {
                env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[test]
    /// What: Export directory expands `~` and defaults to the working directory
    ///
    /// - Input: `~/exports`, an absolute path, `None`
    /// - Output: HOME-joined path, same path, "."
    fn export_dir_expansion() {
        let _guard = crate::config::test_mutex().lock().unwrap();
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        assert_eq!(
            export_dir(Some(Path::new("~/exports"))),
            Path::new(&home).join("exports")
        );
        assert_eq!(export_dir(Some(Path::new("/tmp/x"))), PathBuf::from("/tmp/x"));
        assert_eq!(export_dir(None), PathBuf::from("."));
    }
}
