//! release-zalgo configuration system
//!
//! Supports user-level and project-level configuration with merge semantics.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. Environment variables (RELEASE_ZALGO_MAX_DEPTH, RELEASE_ZALGO_LOG)
//! 2. Project-level (release-zalgo.toml in the working directory)
//! 3. User-level (~/.config/release-zalgo/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use release_zalgo::util::config::load_config;
//!
//! let config = load_config().unwrap();
//! config.apply();
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::runtime::unwrap::{UnwrapLimits, DEFAULT_MAX_DEPTH};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "release-zalgo.toml";

/// Overrides `unwrap.max_depth`
pub const ENV_MAX_DEPTH: &str = "RELEASE_ZALGO_MAX_DEPTH";

/// Overrides `log.level`
pub const ENV_LOG_LEVEL: &str = "RELEASE_ZALGO_LOG";

/// Configuration for release-zalgo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ZalgoConfig {
    /// Synchronous unwrap settings
    #[serde(default)]
    pub unwrap: UnwrapConfig,
    /// Log settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Synchronous unwrap configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnwrapConfig {
    /// Maximum nested thenables followed by one unwrap
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for UnwrapConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl UnwrapConfig {
    pub fn limits(&self) -> UnwrapLimits {
        UnwrapLimits {
            max_depth: self.max_depth.max(1),
        }
    }
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
    /// Colored output
    #[serde(default)]
    pub ansi: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
        }
    }
}

impl ZalgoConfig {
    /// Install the unwrap limits process-wide.
    pub fn apply(&self) {
        self.unwrap.limits().install();
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name.
    pub fn with_overrides_from<F>(
        mut self,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            self.unwrap.max_depth = match raw.trim().parse() {
                Ok(depth) if depth > 0 => depth,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: ENV_MAX_DEPTH,
                        value: raw,
                    })
                }
            };
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log.level = level;
        }
        Ok(self)
    }

    /// Reject values no layer may set.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.unwrap.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "unwrap.max_depth",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }

    /// Overlay a project-level config on top of this one.
    ///
    /// Only keys present in the project file replace user-level values.
    fn merge_project(
        mut self,
        content: &str,
    ) -> Result<Self, ConfigError> {
        let overlay: PartialConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        if let Some(unwrap) = overlay.unwrap {
            if let Some(max_depth) = unwrap.max_depth {
                self.unwrap.max_depth = max_depth;
            }
        }
        if let Some(log) = overlay.log {
            if let Some(level) = log.level {
                self.log.level = level;
            }
            if let Some(ansi) = log.ansi {
                self.log.ansi = ansi;
            }
        }
        self.validate()
    }
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    unwrap: Option<PartialUnwrapConfig>,
    log: Option<PartialLogConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialUnwrapConfig {
    max_depth: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialLogConfig {
    level: Option<String>,
    ansi: Option<bool>,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("release-zalgo"));
    }

    // Fallback to ~/.config/release-zalgo
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("release-zalgo"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("release-zalgo"));
    }

    None
}

/// Get the user config file path (~/.config/release-zalgo/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<ZalgoConfig, ConfigError> {
    toml::from_str::<ZalgoConfig>(content)
        .map_err(ConfigError::ParseError)?
        .validate()
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<ZalgoConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<ZalgoConfig, ConfigError> {
    load_user_config_at(get_config_path().as_deref())
}

fn load_user_config_at(path: Option<&Path>) -> Result<ZalgoConfig, ConfigError> {
    match path {
        Some(path) if path.exists() => load_config_from(path),
        _ => Ok(ZalgoConfig::default()),
    }
}

/// Load the full hierarchy rooted at `project_dir`
pub fn load_config_in(project_dir: &Path) -> Result<ZalgoConfig, ConfigError> {
    load_config_layers(get_config_path().as_deref(), project_dir, |name| std::env::var(name).ok())
}

/// Load the hierarchy from explicit sources: an optional user file, the
/// project directory and an environment lookup.
pub fn load_config_layers<F>(
    user_path: Option<&Path>,
    project_dir: &Path,
    lookup: F,
) -> Result<ZalgoConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = load_user_config_at(user_path)?;

    let project_path = project_dir.join(PROJECT_CONFIG_FILE);
    if project_path.exists() {
        let content = fs::read_to_string(&project_path).map_err(|source| ConfigError::IoError {
            path: project_path.clone(),
            source,
        })?;
        config = config.merge_project(&content)?;
    }

    config.with_overrides_from(lookup)
}

/// Load the full hierarchy rooted at the working directory
pub fn load_config() -> Result<ZalgoConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::IoError {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_in(&cwd)
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ParseError(#[source] toml::de::Error),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Invalid config value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
