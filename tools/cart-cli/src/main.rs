//! Cart CLI - Drive a storefront shopping cart from the command line.
//!
//! Commands:
//! - `cart add` - Add one unit of a product
//! - `cart remove` - Remove a line
//! - `cart set` - Set a line's quantity
//! - `cart inc` / `cart dec` - Step a line's quantity
//! - `cart clear` - Empty the cart
//! - `cart show` - List the cart contents
//! - `cart summary` - Show shipping, tax and the grand total
//! - `cart status` - Show the add-to-cart button state for a product
//! - `cart config` - Manage configuration
//!
//! The cart is saved to a JSON snapshot between runs.

mod commands;
mod config;
mod context;
mod output;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, ClearArgs, ConfigArgs, IdArgs, SetArgs};

/// Cart CLI - Manage a storefront shopping cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Cart snapshot file (overrides the configured path)
    #[arg(short, long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(IdArgs),

    /// Set the quantity of a product in the cart
    Set(SetArgs),

    /// Increase a product's quantity by one
    Inc(IdArgs),

    /// Decrease a product's quantity by one, removing it at zero
    Dec(IdArgs),

    /// Remove everything from the cart
    Clear(ClearArgs),

    /// Show the cart contents
    Show,

    /// Show the order summary
    Summary,

    /// Show whether a product is in the cart
    Status(IdArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.file.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Set(args) => commands::cart::set(args, &ctx).await,
        Commands::Inc(args) => commands::cart::increment(args, &ctx).await,
        Commands::Dec(args) => commands::cart::decrement(args, &ctx).await,
        Commands::Clear(args) => commands::cart::clear(args, &ctx).await,
        Commands::Show => commands::show::show(&ctx).await,
        Commands::Summary => commands::show::summary(&ctx).await,
        Commands::Status(args) => commands::show::status(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
