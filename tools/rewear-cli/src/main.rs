//! Rewear CLI - Terminal storefront for the Rewear catalog.
//!
//! Commands:
//! - `rewear search` - Search products as you would in the search box
//! - `rewear shop` - List products with category, price and sort filters
//! - `rewear product` - Show a product page
//! - `rewear categories` - List categories and price ranges
//! - `rewear session` - Run an interactive cart and wishlist session

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ProductArgs, SearchArgs, SessionArgs, ShopArgs};

/// Rewear CLI - Browse the catalog and run a shopping session
#[derive(Parser)]
#[command(name = "rewear")]
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

    /// Catalog file path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// List products with filters
    Shop(ShopArgs),

    /// Show product details
    Product(ProductArgs),

    /// List categories and price ranges
    Categories,

    /// Start an interactive cart session
    Session(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
