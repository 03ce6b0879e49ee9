//! Filtered product listing.

use anyhow::{Context as _, Result};
use rewear_commerce::catalog::CategoryFilter;
use rewear_commerce::search::{ShopFilter, SortOption};
use serde_json::json;

use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let ranges = ctx.price_ranges(&catalog);

    let category: CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("Invalid --category '{}'", args.category))?;
    let sort = match args.sort.as_deref() {
        Some(key) => key
            .parse::<SortOption>()
            .with_context(|| format!("Invalid --sort '{}'", key))?,
        None => ctx.config.shop.default_sort,
    };

    let mut filter = ShopFilter::new().with_category(category).with_sort(sort);
    for id in &args.prices {
        filter = filter.with_price_range(id.as_str());
    }
    filter.validate(&ranges)?;

    let listing = filter.apply(&catalog, &ranges);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "filter": filter,
            "count": listing.len(),
            "products": listing,
        }));
        return Ok(());
    }

    ctx.output.header(category.display_name());
    ctx.output.kv("Sort", sort.display_name());
    if !filter.price_ranges.is_empty() {
        let labels: Vec<&str> = ranges
            .iter()
            .filter(|r| filter.price_ranges.contains(&r.id))
            .map(|r| r.label.as_str())
            .collect();
        ctx.output.kv("Price", &labels.join(", "));
    }
    ctx.output.kv(
        "Showing",
        &format!("{} of {} products", listing.len(), catalog.len()),
    );
    println!();

    if listing.is_empty() {
        ctx.output.warn("No products match these filters.");
        return Ok(());
    }

    ctx.output.product_heading();
    for product in listing {
        ctx.output.product_row(product);
    }

    Ok(())
}
