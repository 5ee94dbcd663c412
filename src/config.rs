//! # Configuration Management
//!
//! Centralized configuration for the compatibility layer: table loading,
//! brand rewriting and logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`

use crate::core::codec::MAX_STRING_LENGTH;
use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::Level;

/// How long table loading waits for a version to appear in the registry
pub const DEFAULT_REGISTRY_WAIT: Duration = Duration::from_secs(10);

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BridgeConfig {
    /// Compatibility table loading
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Brand channel rewriting
    #[serde(default)]
    pub brand: BrandConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BridgeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(wait) = std::env::var("VERSION_BRIDGE_REGISTRY_WAIT_MS") {
            let millis = wait.parse::<u64>().map_err(|e| {
                BridgeError::ConfigError(format!("Invalid VERSION_BRIDGE_REGISTRY_WAIT_MS: {e}"))
            })?;
            config.loader.registry_wait_timeout = Duration::from_millis(millis);
        }

        if let Ok(strict) = std::env::var("VERSION_BRIDGE_STRICT_VERSIONS") {
            config.loader.strict_version_resolution = parse_flag(&strict).ok_or_else(|| {
                BridgeError::ConfigError(format!(
                    "Invalid VERSION_BRIDGE_STRICT_VERSIONS: '{strict}'"
                ))
            })?;
        }

        if let Ok(name) = std::env::var("VERSION_BRIDGE_BRAND_PROXY_NAME") {
            config.brand.proxy_name = name;
        }

        if let Ok(level) = std::env::var("VERSION_BRIDGE_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                BridgeError::ConfigError(format!("Invalid VERSION_BRIDGE_LOG_LEVEL: '{level}'"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| BridgeError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.loader.validate());
        errors.extend(self.brand.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Compatibility table loading configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Per-entry wait for a version name to appear in the registry
    #[serde(with = "duration_serde")]
    pub registry_wait_timeout: Duration,

    /// Fail the whole load when an entry's version never resolves,
    /// instead of skipping that entry
    pub strict_version_resolution: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            registry_wait_timeout: DEFAULT_REGISTRY_WAIT,
            strict_version_resolution: false,
        }
    }
}

impl LoaderConfig {
    /// Validate loader configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.registry_wait_timeout.is_zero() && !self.strict_version_resolution {
            errors.push(
                "Registry wait timeout of 0 skips every entry not yet registered".to_string(),
            );
        } else if self.registry_wait_timeout.as_secs() > 300 {
            errors.push("Registry wait timeout too long (maximum: 300s)".to_string());
        }

        errors
    }
}

/// Brand channel rewriting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Register the brand handler on new dispatchers
    pub enabled: bool,

    /// Leading name in the rewritten brand
    pub proxy_name: String,

    /// Substituted for a server brand that fails to decode
    pub placeholder: String,

    /// Clients newer than this version get decode errors instead of the placeholder
    pub strict_after: String,

    /// Maximum brand length in UTF-16 code units
    pub max_length: usize,

    /// Insert a formatting reset before the server version
    pub reset_formatting: bool,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            proxy_name: String::from("ViaProxy"),
            placeholder: String::from("Unknown"),
            strict_after: String::from("1.20"),
            max_length: MAX_STRING_LENGTH,
            reset_formatting: false,
        }
    }
}

impl BrandConfig {
    /// Validate brand configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.proxy_name.is_empty() {
            errors.push("Brand proxy name cannot be empty".to_string());
        }

        if self.strict_after.is_empty() {
            errors.push("Brand strict_after version cannot be empty".to_string());
        }

        if self.max_length == 0 {
            errors.push("Brand max length must be greater than 0".to_string());
        } else if self.max_length > MAX_STRING_LENGTH {
            errors.push(format!(
                "Brand max length too large: {} (maximum: {MAX_STRING_LENGTH})",
                self.max_length
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("version-bridge"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Duration as integer milliseconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = duration.as_millis() as u64;
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// tracing::Level as a lowercase name
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
