//! TOML-based configuration for mousepath.
//!
//! Reads and writes [`AppConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\MousePath\config.toml`
//! - Linux:    `~/.config/mousepath/config.toml` (or `$XDG_CONFIG_HOME`)
//! - macOS:    `~/Library/Application Support/MousePath/config.toml`
//!
//! Example file:
//!
//! ```toml
//! [general]
//! log_level = "info"
//! start_delay_secs = 3
//!
//! [driver]
//! failsafe = true
//! pause_ms = 100
//!
//! [motion]
//! move_duration_ms = 1000
//! shake_intensity = 50
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default = "...")]`, and every section
//! `#[serde(default)]`, so a partial file (or an empty one) fills the gaps
//! with the built-in values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::drive_cursor::DriverConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub driver: DriverSettings,
    #[serde(default)]
    pub motion: MotionSettings,
}

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Countdown before the first motion, so the user can let go of the mouse.
    #[serde(default = "default_start_delay_secs")]
    pub start_delay_secs: u64,
}

/// Cursor driver behaviour.  Converted to a [`DriverConfig`] at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverSettings {
    /// Abort motions when the pointer reaches a screen corner.
    #[serde(default = "default_true")]
    pub failsafe: bool,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "default_tween_interval_ms")]
    pub tween_interval_ms: u64,
    #[serde(default = "default_min_tween_ms")]
    pub min_tween_ms: u64,
}

/// Defaults for motions whose parameters are not given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionSettings {
    /// Duration of single moves (`goto`, `relative`, `center`, `random-position`).
    #[serde(default = "default_move_duration_ms")]
    pub move_duration_ms: u64,
    #[serde(default = "default_shake_duration_ms")]
    pub shake_duration_ms: u64,
    /// Maximum jitter offset in pixels, per axis.
    #[serde(default = "default_shake_intensity")]
    pub shake_intensity: i32,
    /// Distance kept from the screen edges by `random-position`.
    #[serde(default = "default_random_margin")]
    pub random_margin: u32,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_start_delay_secs() -> u64 {
    3
}
fn default_true() -> bool {
    true
}
fn default_pause_ms() -> u64 {
    100
}
fn default_tween_interval_ms() -> u64 {
    10
}
fn default_min_tween_ms() -> u64 {
    50
}
fn default_move_duration_ms() -> u64 {
    1000
}
fn default_shake_duration_ms() -> u64 {
    3000
}
fn default_shake_intensity() -> i32 {
    50
}
fn default_random_margin() -> u32 {
    100
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            start_delay_secs: default_start_delay_secs(),
        }
    }
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            failsafe: default_true(),
            pause_ms: default_pause_ms(),
            tween_interval_ms: default_tween_interval_ms(),
            min_tween_ms: default_min_tween_ms(),
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            move_duration_ms: default_move_duration_ms(),
            shake_duration_ms: default_shake_duration_ms(),
            shake_intensity: default_shake_intensity(),
            random_margin: default_random_margin(),
        }
    }
}

impl DriverSettings {
    pub fn to_driver_config(&self) -> DriverConfig {
        DriverConfig {
            failsafe: self.failsafe,
            pause: Duration::from_millis(self.pause_ms),
            tween_interval: Duration::from_millis(self.tween_interval_ms),
            min_tween_duration: Duration::from_millis(self.min_tween_ms),
        }
    }
}

impl MotionSettings {
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let dir = platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)?;
    Ok(dir.join("config.toml"))
}

/// Loads [`AppConfig`] from the default location, returning defaults if the
/// file does not exist yet.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads [`AppConfig`] from `path`, returning defaults if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config directory, including the `MousePath` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("MousePath"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("mousepath"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("MousePath")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
