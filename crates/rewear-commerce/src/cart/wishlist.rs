//! Saved-for-later products.

use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A wishlisted product and when it was saved.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    product: Arc<Product>,
    added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

/// At most one entry per product, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product unless it is already saved. Returns whether it was
    /// inserted.
    pub fn add(&mut self, product: &Arc<Product>) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(WishlistItem {
            product: Arc::clone(product),
            added_at: Utc::now(),
        });
        true
    }

    /// Remove a product, handing back its entry.
    pub fn remove(&mut self, product_id: ProductId) -> Option<WishlistItem> {
        let position = self.items.iter().position(|i| i.product.id == product_id)?;
        Some(self.items.remove(position))
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
