//! Configuration loading, validation, and management for Shelfwatch.
//!
//! Loads configuration from `~/.shelfwatch/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.shelfwatch/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the narrative provider (can be overridden per-provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default narrative provider
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Default model
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Default temperature for narrative requests
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    /// Default max tokens per narrative response
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,

    /// Lookahead window in days for the "expiring soon" bucket
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Inventory input configuration
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Report output configuration
    #[serde(default)]
    pub report: ReportConfig,

    /// Narrative boundary configuration
    #[serde(default)]
    pub narrative: NarrativeConfig,

    /// Provider-specific configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_provider() -> String {
    "openrouter".into()
}
fn default_model() -> String {
    "anthropic/claude-sonnet-4".into()
}
fn default_temperature() -> f32 {
    0.2
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_window_days() -> u32 {
    7
}
fn default_true() -> bool {
    true
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("default_provider", &self.default_provider)
            .field("default_model", &self.default_model)
            .field("default_temperature", &self.default_temperature)
            .field("default_max_tokens", &self.default_max_tokens)
            .field("window_days", &self.window_days)
            .field("inventory", &self.inventory)
            .field("report", &self.report)
            .field("narrative", &self.narrative)
            .field("providers", &self.providers)
            .finish()
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("default_model", &self.default_model)
            .finish()
    }
}

/// Inventory input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Path to the inventory CSV file
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Accepted header names for the expiration column, matched
    /// case-insensitively. The first column matching any alias is used.
    #[serde(default = "default_expiration_aliases")]
    pub expiration_aliases: Vec<String>,
}

fn default_csv_path() -> String {
    "inventory.csv".into()
}
fn default_expiration_aliases() -> Vec<String> {
    vec![
        "expiration_date".into(),
        "expiry_date".into(),
        "expires".into(),
        "best_before".into(),
    ]
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            expiration_aliases: default_expiration_aliases(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where to write the markdown report
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Per-table row cap in the rendered report (0 = unlimited)
    #[serde(default)]
    pub table_limit: usize,

    /// Whether to write per-bucket CSV slices next to the report
    #[serde(default)]
    pub export_slices: bool,
}

fn default_output_path() -> String {
    "inventory_report.md".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            table_limit: 0,
            export_slices: false,
        }
    }
}

/// Narrative boundary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Whether to request recommendations at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Request timeout; on expiry the narrative is treated as unavailable
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rows per bucket table included in the prompt
    #[serde(default = "default_prompt_rows")]
    pub prompt_rows: usize,
}

fn default_timeout_secs() -> u64 {
    90
}
fn default_prompt_rows() -> usize {
    50
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_timeout_secs(),
            prompt_rows: default_prompt_rows(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl AppConfig {
    /// Load configuration from the default path (~/.shelfwatch/config.toml).
    ///
    /// Also checks environment variables for API keys:
    /// - `SHELFWATCH_API_KEY` (highest priority)
    /// - `OPENROUTER_API_KEY`
    /// - `OPENAI_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = Self::config_dir();
        let config_path = config_dir.join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.api_key.is_none() {
            config.api_key = std::env::var("SHELFWATCH_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(provider) = std::env::var("SHELFWATCH_PROVIDER") {
            config.default_provider = provider;
        }

        if let Ok(model) = std::env::var("SHELFWATCH_MODEL") {
            config.default_model = model;
        }

        if let Ok(csv_path) = std::env::var("SHELFWATCH_CSV") {
            config.inventory.csv_path = csv_path;
        }

        if let Ok(output) = std::env::var("SHELFWATCH_REPORT") {
            config.report.output_path = output;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".shelfwatch")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_temperature < 0.0 || self.default_temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "default_temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.narrative.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "narrative.timeout_secs must be at least 1".into(),
            ));
        }

        if self.inventory.expiration_aliases.is_empty() {
            return Err(ConfigError::ValidationError(
                "inventory.expiration_aliases must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string (for `onboard`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_provider: default_provider(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
            window_days: default_window_days(),
            inventory: InventoryConfig::default(),
            report: ReportConfig::default(),
            narrative: NarrativeConfig::default(),
            providers: HashMap::new(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.default_provider, "openrouter");
        assert_eq!(config.window_days, 7);
        assert_eq!(config.inventory.csv_path, "inventory.csv");
        assert!(config.narrative.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.default_provider, config.default_provider);
        assert_eq!(parsed.window_days, config.window_days);
        assert_eq!(parsed.narrative.timeout_secs, config.narrative.timeout_secs);
    }

    #[test]
    fn invalid_temperature_rejected() {
        let config = AppConfig {
            default_temperature: 5.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = AppConfig::default();
        config.narrative.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.default_provider, "openrouter");
    }

    #[test]
    fn malformed_config_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "window_days = \"seven\"").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "window_days = 3\n\n[report]\nexport_slices = true\n",
        )
        .unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.window_days, 3);
        assert!(config.report.export_slices);
        assert_eq!(config.default_model, default_model());
        assert_eq!(config.narrative.prompt_rows, 50);
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("openrouter"));
        assert!(toml_str.contains("window_days = 7"));
        assert!(toml_str.contains("inventory.csv"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".into()),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
