//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The store, search and filter operations themselves are total; these
/// errors come from catalog loading, lookups by id, parsing user
/// selections and the checked cart paths.
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(u32),

    /// Rating outside 0..=5.
    #[error("Invalid rating {rating} for product {product_id}")]
    InvalidRating { product_id: u32, rating: f32 },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Product has sizes but none was selected.
    #[error("Please select a size for {0}")]
    SizeRequired(String),

    /// Selected size is not offered for the product.
    #[error("Size {size} is not available for {product}")]
    UnknownSize { product: String, size: String },

    /// Category slug not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sort key not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Price range id not in the range table.
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Reading catalog data failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
