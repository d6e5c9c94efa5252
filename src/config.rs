// SPDX-License-Identifier: MPL-2.0
//! This module handles loading and saving user preferences to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Toast overlay settings (anchor corner, visibility cap)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a base directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.max_visible = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use crate::notifications::Anchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ToastsConfig {
    /// Screen corner the toast overlay is anchored to.
    #[serde(default)]
    pub anchor: Anchor,

    /// Cap on simultaneously visible toasts; absent means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Toast overlay settings.
    #[serde(default)]
    pub toasts: ToastsConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// Resolution order: explicit override, `ICED_TOASTS_CONFIG_DIR`
/// environment variable, then the platform config directory with the app
/// name appended.
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = base_dir {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails,
/// returns default config with a warning message explaining what went
/// wrong; a broken settings file never prevents startup.
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
                    return (
                        Config::default(),
                        Some(format!("Could not read settings, using defaults ({err})")),
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toasts: ToastsConfig {
                anchor: Anchor::TopLeft,
                max_visible: Some(3),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_warns_and_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn empty_config_file_parses_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn anchor_round_trips_in_kebab_case() {
        let config = Config {
            toasts: ToastsConfig {
                anchor: Anchor::BottomLeft,
                max_visible: None,
            },
        };

        let serialized = toml::to_string_pretty(&config).expect("failed to serialize");
        assert!(serialized.contains("bottom-left"));

        let parsed: Config = toml::from_str(&serialized).expect("failed to parse");
        assert_eq!(parsed.toasts.anchor, Anchor::BottomLeft);
    }

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        // Should fall back to platform default which contains the app name
        if let Some(path) = config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
