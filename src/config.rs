//! Settings file handling.
//!
//! Settings live in `<config dir>/deskcalc/config.toml`. A missing file
//! yields defaults; a malformed file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_HISTORY_CAP;
use crate::format::FormatConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the NaN-folding evaluation path. Observably identical.
    pub turbo: bool,
    /// Memory history entries kept for display.
    pub memory_history_cap: usize,
    /// Minimum recognition confidence for voice commands.
    pub voice_confidence_threshold: f32,
    /// Display formatting parameters.
    pub format: FormatConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            turbo: false,
            memory_history_cap: DEFAULT_HISTORY_CAP,
            voice_confidence_threshold: 0.6,
            format: FormatConfig::default(),
        }
    }
}

/// Default settings file location, if a config directory exists.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
}

/// Load settings from the default location, falling back to defaults when
/// no file exists.
pub fn load() -> anyhow::Result<Settings> {
    match default_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Settings::default()),
    }
}

/// Load settings from a specific file.
pub fn load_from(path: &Path) -> anyhow::Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.turbo);
        assert_eq!(settings.memory_history_cap, DEFAULT_HISTORY_CAP);
        assert_eq!(settings.format.max_length, 64);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let settings: Settings = toml::from_str("turbo = true\n").unwrap();
        assert!(settings.turbo);
        assert_eq!(settings.memory_history_cap, DEFAULT_HISTORY_CAP);
        assert_eq!(settings.format.significant_digits, 12);
    }

    #[test]
    fn test_nested_format_section() {
        let text = "[format]\ndecimal_separator = \",\"\nmax_length = 32\n";
        let settings: Settings = toml::from_str(text).unwrap();
        assert_eq!(settings.format.decimal_separator, ',');
        assert_eq!(settings.format.max_length, 32);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let settings = Settings {
            voice_confidence_threshold: 0.8,
            ..Settings::default()
        };
        let text = toml::to_string(&settings).unwrap();
        let reloaded: Settings = toml::from_str(&text).unwrap();
        assert_eq!(
            reloaded.voice_confidence_threshold,
            settings.voice_confidence_threshold
        );
    }
}
