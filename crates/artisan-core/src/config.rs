//! Storefront configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level storefront configuration.
///
/// Every section is optional in the source file; missing values fall back
/// to the defaults the storefront ships with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Backend endpoints.
    #[serde(default)]
    pub api: ApiConfig,

    /// Cart mirror settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Hero slider settings.
    #[serde(default)]
    pub slider: SliderConfig,

    /// Search-as-you-type settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub toast: ToastConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make a component misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slider.interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("slider.interval_ms"));
        }
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::ZeroDuration("search.debounce_ms"));
        }
        if self.toast.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("toast.duration_ms"));
        }
        if self.cart.max_quantity == 0 {
            return Err(ConfigError::InvalidMaxQuantity(self.cart.max_quantity));
        }
        if self.cart.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the endpoints are resolved against. Empty means same-origin.
    #[serde(default)]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Cart mirror configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Session storage key holding the serialized cart mapping.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How long the cart icon keeps its bounce class.
    #[serde(default = "default_bounce_ms")]
    pub bounce_ms: u64,

    /// Stepper ceiling for inputs without a usable `max`.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,
}

fn default_storage_key() -> String {
    "cart".to_string()
}

fn default_bounce_ms() -> u64 {
    300
}

fn default_max_quantity() -> u32 {
    999
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            bounce_ms: default_bounce_ms(),
            max_quantity: default_max_quantity(),
        }
    }
}

/// Hero slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Autoplay interval.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: i32,
}

fn default_interval_ms() -> u64 {
    6_000
}

fn default_swipe_threshold_px() -> i32 {
    50
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

/// Search-as-you-type configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before submitting.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum query length that triggers a submit (empty always does).
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_min_length() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_length: default_min_length(),
        }
    }
}

/// Toast notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays on screen.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    3_000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `artisan_commerce=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.cart.storage_key, "cart");
        assert_eq!(config.slider.interval_ms, 6000);
        assert_eq!(config.slider.swipe_threshold_px, 50);
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(config.search.min_length, 3);
        assert_eq!(config.toast.duration_ms, 3000);
        assert_eq!(config.cart.max_quantity, 999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [slider]
            interval_ms = 4000

            [logging]
            format = "human"
            "#,
        )
        .unwrap();

        assert_eq!(config.slider.interval_ms, 4000);
        assert_eq!(config.slider.swipe_threshold_px, 50);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.cart, CartConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = StorefrontConfig::from_toml_str("[slider]\ninterval_ms = 0\n");
        assert!(result.is_err());

        let mut config = StorefrontConfig::default();
        config.slider.interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("slider.interval_ms"))
        );
    }

    #[test]
    fn test_invalid_cart_settings() {
        let mut config = StorefrontConfig::default();
        config.cart.max_quantity = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxQuantity(0)));

        let mut config = StorefrontConfig::default();
        config.cart.storage_key.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyStorageKey));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("artisan-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"api": {"base_url": "http://shop.test"}}"#).unwrap();

        let config = StorefrontConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "http://shop.test");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(StorefrontConfig::load("/nonexistent/artisan.toml").is_err());
    }
}
