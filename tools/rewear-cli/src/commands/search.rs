//! Search the catalog.

use anyhow::Result;
use rewear_commerce::search::{search, SearchOutcome};
use serde_json::json;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let query = args.query.join(" ");
    let outcome = search(&catalog, &query);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "query": query.trim(),
            "searching": outcome.is_searching(),
            "results": outcome.results(),
        }));
        return Ok(());
    }

    match outcome {
        SearchOutcome::Idle => {
            ctx.output.info("Not searching. Type a query to search the catalog.");
        }
        SearchOutcome::Matches(ref products) if products.is_empty() => {
            ctx.output.warn(&format!("No products found for \"{}\"", query.trim()));
        }
        SearchOutcome::Matches(ref products) => {
            ctx.output.header(&format!(
                "{} result{} for \"{}\"",
                products.len(),
                if products.len() == 1 { "" } else { "s" },
                query.trim()
            ));
            ctx.output.product_heading();
            for product in products {
                ctx.output.product_row(product);
            }
        }
    }

    Ok(())
}
