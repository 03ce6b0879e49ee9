//! CLI command implementations.

pub mod categories;
pub mod product;
pub mod search;
pub mod session;
pub mod shop;

use clap::Args;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text; multiple words are joined with spaces.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Category slug, or "all".
    #[arg(short = 'C', long, default_value = "all")]
    pub category: String,

    /// Price range id; repeat to combine ranges.
    #[arg(short, long = "price")]
    pub prices: Vec<String>,

    /// Sort key (featured, newest, price-low, price-high, rating).
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Read commands from a file instead of stdin.
    #[arg(short, long)]
    pub script: Option<String>,

    /// Skip confirmation prompts.
    #[arg(short, long)]
    pub yes: bool,
}
