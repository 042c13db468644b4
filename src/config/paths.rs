//! Locating `settings.toml`.
//!
//! Resolution order:
//!
//! 1. `$EXAM_COACH_CONFIG`, when set and non-empty.
//! 2. The platform config directory from the `dirs` crate:
//!    - Windows: `%APPDATA%\exam-coach\settings.toml`
//!    - macOS:   `~/Library/Application Support/exam-coach/settings.toml`
//!    - Linux:   `~/.config/exam-coach/settings.toml`

use std::path::PathBuf;

/// Environment variable that points at an explicit settings file.
pub const CONFIG_PATH_ENV: &str = "EXAM_COACH_CONFIG";

/// Resolved location of the settings file.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory holding `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to the settings file.
    pub settings_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "exam-coach";

    /// Resolves the settings path from the environment, falling back to the
    /// platform config directory (or `.` if the platform has none).
    pub fn new() -> Self {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(explicit) if !explicit.trim().is_empty() => Self::from_file(PathBuf::from(explicit)),
            _ => Self::platform_default(),
        }
    }

    /// Paths rooted at an explicit settings file.
    pub fn from_file(settings_file: PathBuf) -> Self {
        let config_dir = settings_file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            config_dir,
            settings_file,
        }
    }

    fn platform_default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);
        let settings_file = config_dir.join("settings.toml");
        Self {
            config_dir,
            settings_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
