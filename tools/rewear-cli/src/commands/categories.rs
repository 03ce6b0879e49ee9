//! Category and price range overview.

use anyhow::Result;
use serde_json::json;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let counts = catalog.category_counts();
    let ranges = ctx.price_ranges(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "categories": counts,
            "priceRanges": ranges,
        }));
        return Ok(());
    }

    ctx.output.header("Categories");
    for entry in &counts {
        ctx.output.table_row(
            &[entry.filter.as_str(), entry.name, &entry.count.to_string()],
            &[12, 16, 4],
        );
    }

    ctx.output.header("Price Ranges");
    for range in &ranges {
        let matching = catalog.iter().filter(|p| range.contains(&p.price)).count();
        ctx.output.table_row(
            &[range.id.as_str(), &range.label, &matching.to_string()],
            &[12, 16, 4],
        );
    }

    Ok(())
}
