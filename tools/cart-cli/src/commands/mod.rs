//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod show;

use clap::{Args, Subcommand};
use turbo_cart::ProductId;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub id: ProductId,

    /// Product name.
    #[arg(short, long)]
    pub name: String,

    /// Unit price as a decimal (e.g. 99.99).
    #[arg(short, long)]
    pub price: f64,

    /// Image reference.
    #[arg(long, default_value = "")]
    pub image: String,
}

/// Arguments for commands that target one product.
#[derive(Args)]
pub struct IdArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// Product ID.
    pub id: ProductId,

    /// New quantity. Only the leading integer is read; no integer or 0 counts
    /// as 1, negative values remove the product.
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
