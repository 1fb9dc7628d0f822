//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let cart = &ctx.config.cart;
    let currency = cart.store.currency;

    ctx.output.info("[store]");
    ctx.output.kv("currency", currency.code());

    ctx.output.info("");
    ctx.output.info("[summary]");
    ctx.output.kv(
        "free_shipping_threshold",
        &cart.summary.free_shipping_threshold.display(currency),
    );
    ctx.output.kv(
        "flat_shipping_fee",
        &cart.summary.flat_shipping_fee.display(currency),
    );
    ctx.output.kv(
        "tax_rate",
        &format!(
            "{}.{:02}%",
            cart.summary.tax_rate_bps / 100,
            cart.summary.tax_rate_bps % 100
        ),
    );

    ctx.output.info("");
    ctx.output.info("[snapshot]");
    ctx.output.kv("path", &ctx.snapshot_path().display().to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let config_path = find_config_file(&ctx.cwd)?;
    let config = CliConfig::load(&config_path)?;

    let mut warnings: Vec<String> = Vec::new();

    if config.cart.summary.tax_rate_bps > 3_000 {
        warnings.push(format!(
            "summary.tax_rate_bps {} is above 30%",
            config.cart.summary.tax_rate_bps
        ));
    }

    if config.cart.summary.flat_shipping_fee > config.cart.summary.free_shipping_threshold {
        warnings.push("summary.flat_shipping_fee is larger than the free shipping threshold".to_string());
    }

    if !config.snapshot.path.ends_with(".json") {
        warnings.push(format!(
            "snapshot.path '{}' does not end in .json",
            config.snapshot.path
        ));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<PathBuf> {
    for name in &CONFIG_NAMES {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `cart config init` to create one.")
}
