// SPDX-License-Identifier: MPL-2.0
//! This module handles the page configuration stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[rotation]` - Message and progress-caption timings and optional lists
//! - `[notifications]` - Auto-dismiss delay
//! - `[signup]` - Simulated request latency
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `COMING_SOON_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use coming_soon::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let timing = config.message_timing().expect("valid message timing");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::content;
use crate::error::{Error, Result};
use crate::rotation::RotationTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Rotation timings and lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationConfig {
    /// Interval between status message changes (milliseconds).
    #[serde(
        default = "default_message_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_interval_ms: Option<u64>,

    /// Fade delay of a status message change (milliseconds).
    #[serde(
        default = "default_message_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_transition_ms: Option<u64>,

    /// Interval between progress caption changes (milliseconds).
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,

    /// Fade delay of a progress caption change (milliseconds).
    #[serde(
        default = "default_progress_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_transition_ms: Option<u64>,

    /// Replaces the built-in status messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,

    /// Replaces the built-in progress captions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_captions: Option<Vec<String>>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            message_interval_ms: default_message_interval_ms(),
            message_transition_ms: default_message_transition_ms(),
            progress_interval_ms: default_progress_interval_ms(),
            progress_transition_ms: default_progress_transition_ms(),
            messages: None,
            progress_captions: None,
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Delay after which a notification closes on its own (milliseconds).
    #[serde(
        default = "default_auto_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
        }
    }
}

/// Signup simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupConfig {
    /// Simulated request latency (milliseconds).
    #[serde(
        default = "default_signup_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub latency_ms: Option<u64>,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_signup_latency_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Page configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub signup: SignupConfig,
}

impl Config {
    pub fn message_timing(&self) -> Result<RotationTiming> {
        RotationTiming::from_millis(
            self.rotation
                .message_interval_ms
                .unwrap_or(DEFAULT_MESSAGE_INTERVAL_MS),
            self.rotation
                .message_transition_ms
                .unwrap_or(DEFAULT_MESSAGE_TRANSITION_MS),
        )
    }

    pub fn progress_timing(&self) -> Result<RotationTiming> {
        RotationTiming::from_millis(
            self.rotation
                .progress_interval_ms
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
            self.rotation
                .progress_transition_ms
                .unwrap_or(DEFAULT_PROGRESS_TRANSITION_MS),
        )
    }

    /// Status messages, configured or built-in.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.rotation
            .messages
            .clone()
            .unwrap_or_else(|| content::MESSAGES.iter().map(ToString::to_string).collect())
    }

    /// Progress captions, configured or built-in.
    #[must_use]
    pub fn progress_captions(&self) -> Vec<String> {
        self.rotation.progress_captions.clone().unwrap_or_else(|| {
            content::PROGRESS_CAPTIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    pub fn auto_dismiss(&self) -> Result<Duration> {
        positive_millis(
            "notifications.auto_dismiss_ms",
            self.notifications
                .auto_dismiss_ms
                .unwrap_or(DEFAULT_AUTO_DISMISS_MS),
        )
    }

    pub fn signup_latency(&self) -> Result<Duration> {
        positive_millis(
            "signup.latency_ms",
            self.signup.latency_ms.unwrap_or(DEFAULT_SIGNUP_LATENCY_MS),
        )
    }
}

fn positive_millis(field: &str, value: u64) -> Result<Duration> {
    if value == 0 {
        return Err(Error::InvalidConfiguration(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(Duration::from_millis(value))
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_message_interval_ms() -> Option<u64> {
    Some(DEFAULT_MESSAGE_INTERVAL_MS)
}

fn default_message_transition_ms() -> Option<u64> {
    Some(DEFAULT_MESSAGE_TRANSITION_MS)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn default_progress_transition_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_TRANSITION_MS)
}

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_signup_latency_ms() -> Option<u64> {
    Some(DEFAULT_SIGNUP_LATENCY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default configuration");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            rotation: RotationConfig {
                message_interval_ms: Some(4000),
                message_transition_ms: Some(400),
                progress_interval_ms: Some(2500),
                progress_transition_ms: Some(250),
                messages: Some(vec!["Soon".to_string(), "Sooner".to_string()]),
                progress_captions: None,
            },
            notifications: NotificationsConfig {
                auto_dismiss_ms: Some(7000),
            },
            signup: SignupConfig {
                latency_ms: Some(800),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[signup]\nlatency_ms = 10\n").unwrap();
        assert_eq!(config.signup.latency_ms, Some(10));
        assert_eq!(config.rotation, RotationConfig::default());
        assert_eq!(config.notifications, NotificationsConfig::default());
    }

    #[test]
    fn default_config_yields_page_timings() {
        let config = Config::default();
        let message = config.message_timing().unwrap();
        assert_eq!(message.interval(), Duration::from_millis(3000));
        assert_eq!(message.transition(), Duration::from_millis(300));
        let progress = config.progress_timing().unwrap();
        assert_eq!(progress.interval(), Duration::from_millis(2000));
        assert_eq!(progress.transition(), Duration::from_millis(200));
        assert_eq!(config.auto_dismiss().unwrap(), Duration::from_millis(5000));
        assert_eq!(config.signup_latency().unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn default_lists_come_from_content() {
        let config = Config::default();
        assert_eq!(config.messages().len(), content::MESSAGES.len());
        assert_eq!(config.progress_captions()[0], content::PROGRESS_CAPTIONS[0]);
    }

    #[test]
    fn inverted_timing_is_invalid_configuration() {
        let mut config = Config::default();
        config.rotation.message_transition_ms = Some(5000);
        assert!(matches!(
            config.message_timing(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_durations_are_rejected() {
        let mut config = Config::default();
        config.notifications.auto_dismiss_ms = Some(0);
        config.signup.latency_ms = Some(0);
        assert!(config.auto_dismiss().is_err());
        assert!(config.signup_latency().is_err());
    }

    #[test]
    fn load_from_path_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[rotation\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
