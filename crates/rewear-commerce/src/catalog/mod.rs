//! Product catalog module.
//!
//! Contains products, categories, and the read-only catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, FEATURED_LIMIT, RELATED_LIMIT};
pub use category::{Category, CategoryCount, CategoryFilter};
pub use product::{ArtisanDetails, Product, ONE_SIZE};
