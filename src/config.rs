//! Shell Configuration - Ambient settings for the window shell
//!
//! Loaded from a small TOML file; a missing file simply means defaults.
//! Everything here tunes shell behavior only. Application configuration
//! and history live in stores owned by the surrounding application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::ShellError;

// =============================================================================
// SHELL CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Docking edge used when the application creates the toolbar without
    /// naming one. First letter wins, as everywhere: "top", "b", "Left"…
    pub toolbar: String,

    /// Switch to full-screen (alternate screen, chrome hidden) on startup.
    pub start_fullscreen: bool,

    /// Pump wait ceiling when no timer is armed, in milliseconds.
    pub idle_tick_ms: u64,

    /// Play the "click" sound when dialog surfaces are touched.
    pub play_click: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            toolbar: "bottom".to_string(),
            start_fullscreen: false,
            idle_tick_ms: 250,
            play_click: false,
        }
    }
}

impl ShellConfig {
    /// The pump's idle wait as a [`Duration`].
    pub fn idle_tick(&self) -> Duration {
        Duration::from_millis(self.idle_tick_ms)
    }

    /// Default config location: `<config dir>/roadmap-shell/shell.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roadmap-shell").join("shell.toml"))
    }

    /// Load from the default location. No file, or no config directory at
    /// all, yields defaults; a file that fails to parse is an error.
    pub fn load() -> Result<Self, ShellError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ShellError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Write the current settings to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ShellError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.toolbar, "bottom");
        assert!(!config.start_fullscreen);
        assert_eq!(config.idle_tick(), Duration::from_millis(250));
        assert!(!config.play_click);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: ShellConfig = toml::from_str("toolbar = \"top\"").unwrap();
        assert_eq!(config.toolbar, "top");
        assert_eq!(config.idle_tick_ms, 250);
    }

    #[test]
    fn test_full_file_parses() {
        let text = r#"
            toolbar = "left"
            start_fullscreen = true
            idle_tick_ms = 100
            play_click = true
        "#;
        let config: ShellConfig = toml::from_str(text).unwrap();
        assert!(config.start_fullscreen);
        assert_eq!(config.idle_tick(), Duration::from_millis(100));
        assert!(config.play_click);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");

        let mut config = ShellConfig::default();
        config.start_fullscreen = true;
        config.idle_tick_ms = 50;
        config.save_to(&path).unwrap();

        let loaded = ShellConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        fs::write(&path, "idle_tick_ms = \"soon\"").unwrap();

        assert!(matches!(
            ShellConfig::load_from(&path),
            Err(ShellError::Config(_))
        ));
    }
}
