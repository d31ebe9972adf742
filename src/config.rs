//! Configuration module.
//!
//! Settings are layered, later sources winning:
//! - Default values
//! - TOML configuration file (`.arithkit/settings.toml` or `--config`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `ARITHKIT_` and use double
//! underscores to separate nested levels:
//! - `ARITHKIT_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `ARITHKIT_VERSION=2` sets `version`

use figment::{
    Figment,
    providers::{Data, Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory searched for in the current directory and its ancestors.
pub const CONFIG_DIR: &str = ".arithkit";
/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "settings.toml";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ARITHKIT_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an explicit override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module levels, e.g. `arithkit::math = "trace"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    ///
    /// The settings file is looked up from the current directory upwards; a
    /// missing file simply leaves the defaults in place.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path =
            Self::find_workspace_config().unwrap_or_else(|| Path::new(CONFIG_DIR).join(CONFIG_FILE));
        Self::layered(Toml::file(config_path), ENV_PREFIX)
    }

    /// Load configuration from a specific file, still honouring env overrides.
    ///
    /// Unlike [`Settings::load`], the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::layered(Toml::file_exact(path.as_ref()), ENV_PREFIX)
    }

    fn layered(file: Data<Toml>, env_prefix: &str) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(file)
            // Double underscore separates nested levels; single underscores
            // stay part of the field name.
            .merge(Env::prefixed(env_prefix).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find `.arithkit/settings.toml` by walking up from the current directory.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2

[logging]
default = "info"

[logging.modules]
"arithkit::math" = "trace"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::layered(Toml::file_exact(&config_path), "ARITHKIT_TEST_TOML_").unwrap();
        assert_eq!(settings.version, 2);
        assert_eq!(settings.logging.default, "info");
        assert_eq!(settings.logging.modules["arithkit::math"], "trace");
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("does-not-exist.toml");

        let settings = Settings::layered(Toml::file(&config_path), "ARITHKIT_TEST_MISSING_").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[logging]\ndefault = \"error\"\n").unwrap();

        let settings = Settings::layered(Toml::file_exact(&config_path), "ARITHKIT_TEST_PARTIAL_").unwrap();
        assert_eq!(settings.logging.default, "error");
        // Untouched values fall back to defaults
        assert_eq!(settings.version, 1);
    }

    #[test]
    fn test_env_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "version = 3\n[logging]\ndefault = \"info\"\n").unwrap();

        unsafe {
            std::env::set_var("ARITHKIT_TEST_ENV_LOGGING__DEFAULT", "debug");
        }

        let settings = Settings::layered(Toml::file_exact(&config_path), "ARITHKIT_TEST_ENV_").unwrap();

        unsafe {
            std::env::remove_var("ARITHKIT_TEST_ENV_LOGGING__DEFAULT");
        }

        // Environment variable should override config file
        assert_eq!(settings.logging.default, "debug");
        // Config file value should be used when no env var
        assert_eq!(settings.version, 3);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        assert!(Settings::load_from(&config_path).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "version = \"not a number\"\n").unwrap();

        assert!(Settings::layered(Toml::file_exact(&config_path), "ARITHKIT_TEST_INVALID_").is_err());
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.logging.default = "trace".to_string();
        settings
            .logging
            .modules
            .insert("arithkit::cli".to_string(), "debug".to_string());

        settings.save(&config_path).unwrap();

        let loaded = Settings::layered(Toml::file_exact(&config_path), "ARITHKIT_TEST_SAVE_").unwrap();
        assert_eq!(loaded, settings);
    }
}
