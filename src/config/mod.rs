//! Configuration: directory layout and `settings.toml`.

mod paths;
mod settings;

pub use paths::{config_dir, export_dir, logs_dir, settings_path};
pub use settings::{SKELETON_SETTINGS_CONTENT, Settings, settings, try_load_settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
