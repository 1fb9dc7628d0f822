//! Cart configuration.

use std::path::Path;

use crate::error::CartError;
use crate::money::Currency;
use crate::summary::SummaryConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Store-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency used to render amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Configuration for a cart session.
///
/// ```toml
/// [store]
/// currency = "USD"
///
/// [summary]
/// free_shipping_threshold = 5000
/// flat_shipping_fee = 599
/// tax_rate_bps = 800
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub summary: SummaryConfig,
}

impl CartConfig {
    /// Check values a summary cannot be computed from.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.summary.free_shipping_threshold.is_negative() {
            return Err(CartError::Config(
                "summary.free_shipping_threshold must not be negative".to_string(),
            ));
        }
        if self.summary.flat_shipping_fee.is_negative() {
            return Err(CartError::Config(
                "summary.flat_shipping_fee must not be negative".to_string(),
            ));
        }
        if self.summary.tax_rate_bps > 10_000 {
            return Err(CartError::Config(format!(
                "summary.tax_rate_bps must be 0-10000, got {}",
                self.summary.tax_rate_bps
            )));
        }
        Ok(())
    }
}

impl AsRef<CartConfig> for CartConfig {
    fn as_ref(&self) -> &CartConfig {
        self
    }
}

/// Config document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse a config document and validate its cart settings.
///
/// `T` is any config that embeds [`CartConfig`], such as a binary's own file
/// with extra tables next to `[store]` and `[summary]`.
pub fn parse_config<T>(content: &str, format: ConfigFormat) -> Result<T, CartError>
where
    T: DeserializeOwned + AsRef<CartConfig>,
{
    let config: T = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| CartError::Config(e.to_string()))?,
    };
    config.as_ref().validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn parse_toml(content: &str) -> Result<CartConfig, CartError> {
        parse_config(content, ConfigFormat::Toml)
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = parse_toml("").unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.summary.flat_shipping_fee, Money::new(599));
        assert_eq!(config.store.currency, Currency::USD);
    }

    #[test]
    fn test_partial_toml() {
        let config = parse_toml(
            r#"
            [store]
            currency = "EUR"

            [summary]
            tax_rate_bps = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.store.currency, Currency::EUR);
        assert_eq!(config.summary.tax_rate_bps, 2000);
        assert_eq!(config.summary.free_shipping_threshold, Money::new(5000));
    }

    #[test]
    fn test_rejects_negative_fee() {
        let result = parse_toml("[summary]\nflat_shipping_fee = -1\n");
        assert!(matches!(result, Err(CartError::Config(_))));
    }

    #[test]
    fn test_rejects_tax_over_100_percent() {
        let result: Result<CartConfig, _> =
            parse_config(r#"{"summary": {"tax_rate_bps": 10001}}"#, ConfigFormat::Json);
        assert!(matches!(result, Err(CartError::Config(_))));
    }

    #[test]
    fn test_syntax_errors_are_config_errors() {
        assert!(matches!(parse_toml("[summary"), Err(CartError::Config(_))));
        let result: Result<CartConfig, _> = parse_config("{", ConfigFormat::Json);
        assert!(matches!(result, Err(CartError::Config(_))));
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        assert!(parse_toml("[store]\ncurrency = \"XYZ\"\n").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("cart.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("CART.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("cart.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new(".cart.toml")), ConfigFormat::Toml);
    }
}
