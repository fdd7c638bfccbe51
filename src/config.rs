//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\cdlookup\config.toml
//! - macOS: ~/Library/Application Support/cdlookup/config.toml
//! - Linux: ~/.config/cdlookup/config.toml
//!
//! The file is optional; every setting has a default, so running without
//! one behaves exactly like an empty file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::disc::DEFAULT_DEVICE;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MusicBrainz web service settings
    pub musicbrainz: MusicBrainzConfig,

    /// Disc drive settings
    pub disc: DiscConfig,
}

/// MusicBrainz web service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicBrainzConfig {
    /// Web service root, without trailing slash
    pub base_url: String,

    /// Contact URL or e-mail sent in the User-Agent, as MusicBrainz asks
    pub contact: String,

    /// Minimum time between two requests in milliseconds (service limit is 1/sec)
    pub rate_limit_ms: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            contact: "https://github.com/cdlookup".to_string(),
            rate_limit_ms: 1000,
        }
    }
}

/// Disc drive settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscConfig {
    /// Device the disc ID is read from
    pub device: String,
}

impl Default for DiscConfig {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cdlookup"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::debug!(target: "config", "Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!(target: "config", "No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(target: "config", "{}; using default configuration", e);
            Config::default()
        }
    }
}

/// Load configuration from an explicit path
///
/// Unlike [`load`], a missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;

    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

    tracing::debug!(target: "config", "Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.musicbrainz.base_url, "https://musicbrainz.org/ws/2");
        assert_eq!(config.musicbrainz.rate_limit_ms, 1000);
        assert_eq!(config.disc.device, "/dev/cdrom");
    }

    #[test]
    fn test_default_config_serializes() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml.contains("[musicbrainz]"));
        assert!(toml.contains("[disc]"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[disc]
device = "/dev/sr1"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.disc.device, "/dev/sr1");
        assert_eq!(config.musicbrainz.rate_limit_ms, 1000);
        assert_eq!(config.musicbrainz.contact, "https://github.com/cdlookup");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[musicbrainz]\nbase_url = \"http://localhost:5000/ws/2\"\nrate_limit_ms = 0"
        )
        .unwrap();

        let config = load_from(file.path()).unwrap();

        assert_eq!(config.musicbrainz.base_url, "http://localhost:5000/ws/2");
        assert_eq!(config.musicbrainz.rate_limit_ms, 0);
        assert_eq!(config.disc.device, "/dev/cdrom");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read(..))));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[musicbrainz\nrate_limit_ms = \"soon\"").unwrap();

        let result = load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(..))));
    }
}
