//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use std::sync::Arc;

/// A product in the cart at one size.
///
/// `(product id, size)` is unique within a cart and `quantity` is always
/// at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Arc<Product>,
    quantity: i64,
    size: Option<String>,
}

impl CartItem {
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.saturating_multiply(self.quantity)
    }

    fn is_keyed(&self, product_id: ProductId, size: Option<&str>) -> bool {
        self.product.id == product_id && self.size.as_deref() == size
    }
}

/// Ordered cart lines, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product at `size`, merging with an existing line
    /// for the same product and size.
    ///
    /// Returns the line's quantity afterwards, or `None` when `quantity`
    /// is not positive and nothing changed.
    pub fn add(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
        size: Option<&str>,
    ) -> Option<i64> {
        if quantity <= 0 {
            return None;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.is_keyed(product.id, size)) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Some(existing.quantity);
        }

        self.items.push(CartItem {
            product: Arc::clone(product),
            quantity,
            size: size.map(str::to_string),
        });
        Some(quantity)
    }

    /// Remove every line for a product, whatever its size.
    ///
    /// Returns the number of lines removed.
    pub fn remove_product(&mut self, product_id: ProductId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        len_before - self.items.len()
    }

    /// Set the quantity of the first line for a product.
    ///
    /// A quantity of zero or less removes all of the product's lines.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_product(product_id) > 0;
        }

        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// First line for a product.
    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals in `currency`.
    pub fn total(&self, currency: Currency) -> Money {
        self.items
            .iter()
            .fold(Money::zero(currency), |acc, item| acc.saturating_add(&item.line_total()))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
