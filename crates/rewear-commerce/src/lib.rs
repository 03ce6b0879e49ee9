//! Storefront domain types and logic for Rewear.
//!
//! This crate provides the pieces of the storefront that carry real rules:
//!
//! - **Catalog**: Immutable products, categories, catalog loading
//! - **Cart**: Session cart and wishlist store, checkout summary
//! - **Search**: Search-as-you-type, listing filters and sort orders
//!
//! # Example
//!
//! ```rust,ignore
//! use rewear_commerce::prelude::*;
//!
//! let catalog = Catalog::load("catalog.json")?;
//! let mut store = Store::for_catalog(&catalog);
//!
//! let jacket = catalog.require(ProductId::new(1))?;
//! store.add_to_cart_checked(jacket, 2, Some("M"))?;
//!
//! let summary = OrderSummary::for_store(&store, &ChargeRates::default());
//! println!("Total: {}", summary.grand_total);
//!
//! let hemp = search(&catalog, "hemp");
//! println!("{} matches", hemp.results().len());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        ArtisanDetails, Catalog, Category, CategoryCount, CategoryFilter, Product,
    };

    // Cart
    pub use crate::cart::{
        CartItem, CartLine, ChargeRates, OrderSummary, SessionSnapshot, Store, WishlistItem,
    };

    // Search
    pub use crate::search::{
        search, PriceRange, SearchOutcome, SearchSession, ShopFilter, SortOption,
    };
}
