//! Product detail page.

use anyhow::Result;
use rewear_commerce::catalog::RELATED_LIMIT;
use rewear_commerce::ProductId;
use serde_json::json;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let id = ProductId::new(args.id);
    let product = catalog.require(id)?;
    let related = catalog.related(id, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "savings": product.savings(),
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Category", product.category.display_name());
    if let Some(savings) = product.savings() {
        ctx.output.kv(
            "Price",
            &format!(
                "{} (was {}, save {}, {}% off)",
                product.price, product.original_price, savings, product.discount
            ),
        );
    } else {
        ctx.output.kv("Price", &product.price.display());
    }
    ctx.output.kv(
        "Rating",
        &format!("{:.1} ({} reviews)", product.rating, product.reviews),
    );
    if product.is_new {
        ctx.output.kv("Status", "New arrival");
    }
    if !product.story.is_empty() {
        ctx.output.kv("Story", &product.story);
    }
    if !product.description.is_empty() {
        println!("\n  {}", product.description);
    }

    let sizes = if product.requires_size() {
        product.sizes.join(", ")
    } else {
        "One Size".to_string()
    };
    ctx.output.kv("Sizes", &sizes);

    print_list(ctx, "Materials", &product.materials);
    print_list(ctx, "Features", &product.features);
    print_list(ctx, "Care", &product.care);

    let details = &product.artisan_details;
    ctx.output.header("Meet the Artisan");
    let maker = if details.name.is_empty() {
        product.artisan.as_str()
    } else {
        details.name.as_str()
    };
    ctx.output.kv("Name", maker);
    for (key, value) in [
        ("Location", &details.location),
        ("Experience", &details.experience),
        ("Specialty", &details.specialty),
    ] {
        if !value.is_empty() {
            ctx.output.kv(key, value);
        }
    }

    if !related.is_empty() {
        ctx.output.header("You May Also Like");
        ctx.output.product_heading();
        for product in related {
            ctx.output.product_row(product);
        }
    }

    Ok(())
}

fn print_list(ctx: &Context, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ctx.output.header(title);
    for item in items {
        ctx.output.list_item(item);
    }
}
