//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_cart::config::{parse_config, ConfigFormat};
use turbo_cart::CartConfig;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
///
/// The `[store]` and `[summary]` tables belong to the cart library; the CLI
/// adds `[snapshot]` for where the cart is saved between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart settings.
    #[serde(flatten)]
    pub cart: CartConfig,

    /// Snapshot storage.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Parse and validate config text, choosing the format from the file
    /// extension.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        parse_config(content, ConfigFormat::from_path(path))
            .with_context(|| format!("Invalid config: {}", path.display()))
    }
}

impl AsRef<CartConfig> for CliConfig {
    fn as_ref(&self) -> &CartConfig {
        &self.cart
    }
}

/// Where the cart snapshot lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Snapshot path, relative to the working directory.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

fn default_snapshot_path() -> String {
    ".cart/cart.json".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

/// Generate a default cart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront cart configuration

[store]
currency = "USD"

[summary]
# Amounts are in cents.
free_shipping_threshold = 5000
flat_shipping_fee = 599
# 800 basis points = 8%
tax_rate_bps = 800

[snapshot]
path = ".cart/cart.json"
"#
    .to_string()
}
