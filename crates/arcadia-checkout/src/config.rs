//! # Storefront Configuration
//!
//! Pricing parameters for the storefront, kept out of the code so a
//! threshold change never requires a release.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ARCADIA_CURRENCY=usd                                               │
//! │     ARCADIA_FREE_SHIPPING_CENTS=6000                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/arcadia-storefront/storefront.toml (Linux)               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     usd, $60.00 threshold, $5.99 flat rate, pre-discount basis         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! currency = "usd"
//!
//! [shipping]
//! free_threshold_cents = 6000
//! flat_rate_cents = 599
//! basis = "pre_discount"  # pre_discount | post_discount
//! ```

use std::path::PathBuf;

use arcadia_core::money::Money;
use arcadia_core::shipping::{ShippingBasis, ShippingPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Shipping Settings
// =============================================================================

/// Shipping pricing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSettings {
    /// Subtotal (cents) at or above which shipping is free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold_cents: i64,

    /// Flat rate (cents) charged below the threshold.
    #[serde(default = "default_flat_rate")]
    pub flat_rate_cents: i64,

    /// Which amount the threshold is compared against.
    #[serde(default)]
    pub basis: ShippingBasis,
}

fn default_free_threshold() -> i64 {
    6000
}

fn default_flat_rate() -> i64 {
    599
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            free_threshold_cents: default_free_threshold(),
            flat_rate_cents: default_flat_rate(),
            basis: ShippingBasis::default(),
        }
    }
}

// =============================================================================
// Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// ISO currency code sent with payment-intent requests.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Shipping pricing settings.
    #[serde(default)]
    pub shipping: ShippingSettings,
}

fn default_currency() -> String {
    "usd".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            currency: default_currency(),
            shipping: ShippingSettings::default(),
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.shipping.free_threshold_cents < 0 {
            return Err(ConfigError::Invalid(
                "free_threshold_cents must not be negative".into(),
            ));
        }
        if self.shipping.flat_rate_cents < 0 {
            return Err(ConfigError::Invalid(
                "flat_rate_cents must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(currency) = std::env::var("ARCADIA_CURRENCY") {
            debug!(currency = %currency, "Overriding currency from environment");
            self.currency = currency;
        }

        if let Ok(cents) = std::env::var("ARCADIA_FREE_SHIPPING_CENTS") {
            if let Ok(c) = cents.parse::<i64>() {
                self.shipping.free_threshold_cents = c;
            }
        }

        if let Ok(cents) = std::env::var("ARCADIA_FLAT_SHIPPING_CENTS") {
            if let Ok(c) = cents.parse::<i64>() {
                self.shipping.flat_rate_cents = c;
            }
        }

        if let Ok(basis) = std::env::var("ARCADIA_SHIPPING_BASIS") {
            match basis.to_lowercase().as_str() {
                "pre_discount" => self.shipping.basis = ShippingBasis::PreDiscount,
                "post_discount" => self.shipping.basis = ShippingBasis::PostDiscount,
                _ => warn!(basis = %basis, "Unknown shipping basis in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "arcadia", "arcadia-storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the shipping policy as core types.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(
            Money::from_cents(self.shipping.free_threshold_cents),
            Money::from_cents(self.shipping.flat_rate_cents),
        )
    }

    /// Returns the configured threshold basis.
    pub fn shipping_basis(&self) -> ShippingBasis {
        self.shipping.basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.currency, "usd");
        assert_eq!(config.shipping.free_threshold_cents, 6000);
        assert_eq!(config.shipping.flat_rate_cents, 599);
        assert_eq!(config.shipping.basis, ShippingBasis::PreDiscount);
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorefrontConfig::default();
        assert!(config.validate().is_ok());

        config.currency = "  ".to_string();
        assert!(config.validate().is_err());

        config.currency = "usd".to_string();
        config.shipping.flat_rate_cents = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StorefrontConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[shipping]"));

        let parsed: StorefrontConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.shipping.free_threshold_cents,
            config.shipping.free_threshold_cents
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: StorefrontConfig =
            toml::from_str("[shipping]\nfree_threshold_cents = 5000\n").unwrap();
        assert_eq!(parsed.shipping.free_threshold_cents, 5000);
        assert_eq!(parsed.shipping.flat_rate_cents, 599);
        assert_eq!(parsed.currency, "usd");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");

        let mut config = StorefrontConfig::default();
        config.shipping.free_threshold_cents = 7500;
        config.save(Some(path.clone())).unwrap();

        let loaded = StorefrontConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.shipping.free_threshold_cents, 7500);
    }
}
