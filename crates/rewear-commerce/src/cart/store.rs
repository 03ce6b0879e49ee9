//! Session store for the cart and wishlist.

use crate::cart::{Cart, CartItem, ChargeRates, OrderSummary, Wishlist, WishlistItem};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// What the current session intends to buy or save.
///
/// Constructed by the caller and passed to whatever needs it. Every
/// mutation completes before the method returns; derived totals are
/// recomputed on each read.
#[derive(Debug, Clone)]
pub struct Store {
    session_id: SessionId,
    currency: Currency,
    cart: Cart,
    wishlist: Wishlist,
}

impl Store {
    /// Create an empty store for products priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            session_id: SessionId::generate(),
            currency,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
        }
    }

    /// Create an empty store for a catalog's products.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.currency())
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add `quantity` of a product at an optional size.
    ///
    /// Merges into the line with the same product and size. A quantity of
    /// zero or less changes nothing.
    pub fn add_to_cart(&mut self, product: &Arc<Product>, quantity: i64, size: Option<&str>) {
        match self.cart.add(product, quantity, size) {
            Some(line_quantity) => tracing::debug!(
                session = %self.session_id,
                product = %product.id,
                size = size.unwrap_or("-"),
                added = quantity,
                line_quantity,
                "added to cart"
            ),
            None => tracing::debug!(
                session = %self.session_id,
                product = %product.id,
                quantity,
                "ignored non-positive cart quantity"
            ),
        }
    }

    /// Add to the cart the way the product page does: a size must be picked
    /// for sized products and must be one the product offers.
    ///
    /// Products without a size choice are always keyed with no size, so
    /// picking "One Size" merges with a plain add.
    pub fn add_to_cart_checked(
        &mut self,
        product: &Arc<Product>,
        quantity: i64,
        size: Option<&str>,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        match size {
            None if product.requires_size() => {
                return Err(CommerceError::SizeRequired(product.name.clone()));
            }
            Some(size) if !product.offers_size(size) => {
                return Err(CommerceError::UnknownSize {
                    product: product.name.clone(),
                    size: size.to_string(),
                });
            }
            _ => {}
        }
        let size = size.filter(|_| product.requires_size());
        self.add_to_cart(product, quantity, size);
        Ok(())
    }

    /// Remove every cart line for a product, all sizes.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let removed = self.cart.remove_product(product_id);
        tracing::debug!(
            session = %self.session_id,
            product = %product_id,
            removed,
            "removed from cart"
        );
    }

    /// Set the quantity of the product's first cart line; zero or less
    /// removes the product from the cart.
    pub fn update_cart_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let changed = self.cart.set_quantity(product_id, quantity);
        tracing::debug!(
            session = %self.session_id,
            product = %product_id,
            quantity,
            changed,
            "updated cart quantity"
        );
    }

    /// Save a product. Saving it twice leaves one entry.
    pub fn add_to_wishlist(&mut self, product: &Arc<Product>) {
        if self.wishlist.add(product) {
            tracing::debug!(session = %self.session_id, product = %product.id, "added to wishlist");
        }
    }

    pub fn remove_from_wishlist(&mut self, product_id: ProductId) {
        if self.wishlist.remove(product_id).is_some() {
            tracing::debug!(
                session = %self.session_id,
                product = %product_id,
                "removed from wishlist"
            );
        }
    }

    /// Save the product if it is not saved, otherwise remove it. Returns
    /// whether it is now in the wishlist.
    pub fn toggle_wishlist(&mut self, product: &Arc<Product>) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.cart.contains(product_id)
    }

    /// Sum of price × quantity over the cart.
    pub fn cart_total(&self) -> Money {
        self.cart.total(self.currency)
    }

    /// Sum of quantities, for badge counters.
    pub fn cart_items_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn wishlist_items(&self) -> &[WishlistItem] {
        self.wishlist.items()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Empty the cart. The wishlist is kept.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        tracing::debug!(session = %self.session_id, "cleared cart");
    }

    /// Move a product from the cart to the wishlist, dropping all of its
    /// cart lines. Does nothing if the product is not in the cart.
    pub fn move_to_wishlist(&mut self, product_id: ProductId) {
        let Some(product) = self.cart.find(product_id).map(|i| Arc::clone(i.product())) else {
            return;
        };
        self.add_to_wishlist(&product);
        self.remove_from_cart(product_id);
    }

    /// Move a product from the wishlist to the cart as one unit with no
    /// size. Does nothing if the product is not in the wishlist.
    pub fn move_to_cart(&mut self, product_id: ProductId) {
        let Some(entry) = self.wishlist.remove(product_id) else {
            return;
        };
        self.add_to_cart(entry.product(), 1, None);
        tracing::debug!(session = %self.session_id, product = %product_id, "moved to cart");
    }

    /// Place the order: price the cart and empty it.
    pub fn checkout(&mut self, rates: &ChargeRates) -> Result<OrderSummary, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let summary = OrderSummary::for_store(self, rates);
        self.cart.clear();
        tracing::info!(
            session = %self.session_id,
            items = summary.item_count,
            total = %summary.grand_total,
            "order placed"
        );
        Ok(summary)
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            cart: self
                .cart
                .items()
                .iter()
                .map(|item| CartLine {
                    product_id: item.product_id(),
                    name: item.product().name.clone(),
                    size: item.size().map(str::to_string),
                    quantity: item.quantity(),
                    unit_price: item.product().price,
                    line_total: item.line_total(),
                })
                .collect(),
            wishlist: self
                .wishlist
                .items()
                .iter()
                .map(|item| WishlistLine {
                    product_id: item.product_id(),
                    name: item.product().name.clone(),
                    added_at: item.added_at(),
                })
                .collect(),
            cart_items_count: self.cart_items_count(),
            cart_total: self.cart_total(),
        }
    }
}

/// Point-in-time copy of a [`Store`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishlistLine>,
    pub cart_items_count: i64,
    pub cart_total: Money,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub size: Option<String>,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WishlistLine {
    pub product_id: ProductId,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    const JACKET: ProductId = ProductId::new(1);
    const KURTA: ProductId = ProductId::new(2);
    const TOTE: ProductId = ProductId::new(3);

    fn catalog() -> Catalog {
        Catalog::from_products(
            Currency::INR,
            vec![
                Product::new(
                    JACKET,
                    "Navigating The Sea Denim Jacket",
                    Money::from_major(1499, Currency::INR),
                    Category::Clothing,
                )
                .with_sizes(["XS", "S", "M", "L", "XL"]),
                Product::new(
                    KURTA,
                    "Vintage Patchwork Kurta",
                    Money::from_major(899, Currency::INR),
                    Category::Clothing,
                )
                .with_sizes(["S", "M", "L"]),
                Product::new(
                    TOTE,
                    "Eco-Friendly Tote Bag",
                    Money::from_major(599, Currency::INR),
                    Category::Accessories,
                )
                .with_sizes(["One Size"]),
            ],
        )
        .unwrap()
    }

    fn product(catalog: &Catalog, id: ProductId) -> &Arc<Product> {
        catalog.get(id).unwrap()
    }

    #[test]
    fn test_store_starts_empty() {
        let store = Store::for_catalog(&catalog());
        assert!(store.is_cart_empty());
        assert_eq!(store.cart_items_count(), 0);
        assert_eq!(store.wishlist_count(), 0);
        assert!(store.cart_total().is_zero());
    }

    #[test]
    fn test_add_same_product_and_size_merges() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 2, Some("M"));
        store.add_to_cart(product(&catalog, JACKET), 3, Some("M"));

        assert_eq!(store.cart_items().len(), 1);
        assert_eq!(store.cart_items()[0].quantity(), 5);
    }

    #[test]
    fn test_add_same_product_two_sizes() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 1, Some("S"));
        store.add_to_cart(product(&catalog, JACKET), 1, Some("L"));

        assert_eq!(store.cart_items().len(), 2);
    }

    #[test]
    fn test_update_quantity_zero_and_negative_remove() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);

        store.add_to_cart(product(&catalog, TOTE), 2, None);
        store.update_cart_quantity(TOTE, 0);
        assert!(!store.is_in_cart(TOTE));

        store.add_to_cart(product(&catalog, TOTE), 2, None);
        store.update_cart_quantity(TOTE, -1);
        assert!(!store.is_in_cart(TOTE));
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, TOTE), 2, None);
        store.update_cart_quantity(TOTE, 7);
        assert_eq!(store.cart_items_count(), 7);
    }

    #[test]
    fn test_remove_from_cart_all_sizes() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 1, Some("S"));
        store.add_to_cart(product(&catalog, JACKET), 1, Some("XL"));
        store.add_to_cart(product(&catalog, KURTA), 1, Some("M"));

        store.remove_from_cart(JACKET);
        assert!(!store.is_in_cart(JACKET));
        assert!(store.is_in_cart(KURTA));
    }

    #[test]
    fn test_items_count_sums_quantities() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 2, Some("M"));
        store.add_to_cart(product(&catalog, KURTA), 3, Some("L"));

        assert_eq!(store.cart_items().len(), 2);
        assert_eq!(store.cart_items_count(), 5);
    }

    #[test]
    fn test_cart_total() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 2, Some("M"));
        store.add_to_cart(product(&catalog, TOTE), 1, None);

        assert_eq!(store.cart_total(), Money::from_major(3597, Currency::INR));
    }

    #[test]
    fn test_wishlist_idempotent() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_wishlist(product(&catalog, KURTA));
        store.add_to_wishlist(product(&catalog, KURTA));

        assert_eq!(store.wishlist_count(), 1);
        assert!(store.is_in_wishlist(KURTA));

        store.remove_from_wishlist(KURTA);
        assert!(!store.is_in_wishlist(KURTA));
    }

    #[test]
    fn test_toggle_wishlist() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        assert!(store.toggle_wishlist(product(&catalog, TOTE)));
        assert!(!store.toggle_wishlist(product(&catalog, TOTE)));
        assert_eq!(store.wishlist_count(), 0);
    }

    #[test]
    fn test_clear_cart_keeps_wishlist() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, TOTE), 1, None);
        store.add_to_wishlist(product(&catalog, KURTA));

        store.clear_cart();
        assert!(store.is_cart_empty());
        assert_eq!(store.wishlist_count(), 1);
    }

    #[test]
    fn test_move_to_wishlist_drops_all_sizes() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 1, Some("S"));
        store.add_to_cart(product(&catalog, JACKET), 2, Some("M"));
        store.add_to_wishlist(product(&catalog, JACKET));

        store.move_to_wishlist(JACKET);
        assert!(!store.is_in_cart(JACKET));
        assert_eq!(store.wishlist_count(), 1);

        // not in cart: nothing happens
        store.move_to_wishlist(KURTA);
        assert!(!store.is_in_wishlist(KURTA));
    }

    #[test]
    fn test_move_to_cart_twice() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_wishlist(product(&catalog, KURTA));

        store.move_to_cart(KURTA);
        assert!(store.is_in_cart(KURTA));
        assert!(!store.is_in_wishlist(KURTA));
        assert_eq!(store.cart_items()[0].quantity(), 1);
        assert_eq!(store.cart_items()[0].size(), None);

        store.move_to_cart(KURTA);
        assert_eq!(store.cart_items_count(), 1);
    }

    #[test]
    fn test_checked_add_requires_size() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);

        let err = store
            .add_to_cart_checked(product(&catalog, JACKET), 1, None)
            .unwrap_err();
        assert!(matches!(err, CommerceError::SizeRequired(_)));

        let err = store
            .add_to_cart_checked(product(&catalog, JACKET), 1, Some("XXXL"))
            .unwrap_err();
        assert!(matches!(err, CommerceError::UnknownSize { .. }));

        let err = store
            .add_to_cart_checked(product(&catalog, JACKET), 0, Some("M"))
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidQuantity(0)));

        assert!(store.is_cart_empty());

        store
            .add_to_cart_checked(product(&catalog, TOTE), 1, None)
            .unwrap();
        store
            .add_to_cart_checked(product(&catalog, JACKET), 1, Some("M"))
            .unwrap();
        assert_eq!(store.cart_items_count(), 2);
    }

    #[test]
    fn test_checked_add_one_size_keeps_single_line() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        let tote = product(&catalog, TOTE);

        store.add_to_cart_checked(tote, 1, None).unwrap();
        store.add_to_cart_checked(tote, 2, Some("One Size")).unwrap();
        store.add_to_wishlist(tote);
        store.move_to_cart(TOTE);

        assert_eq!(store.cart_items().len(), 1);
        assert_eq!(store.cart_items()[0].size(), None);
        assert_eq!(store.cart_items()[0].quantity(), 4);
    }

    #[test]
    fn test_checkout_clears_cart() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        assert!(matches!(
            store.checkout(&ChargeRates::default()),
            Err(CommerceError::EmptyCart)
        ));

        store.add_to_cart(product(&catalog, JACKET), 1, Some("M"));
        store.add_to_cart(product(&catalog, KURTA), 1, Some("M"));
        store.add_to_wishlist(product(&catalog, TOTE));

        let summary = store.checkout(&ChargeRates::default()).unwrap();
        assert_eq!(summary.grand_total, Money::from_major(2830, Currency::INR));
        assert!(store.is_cart_empty());
        assert_eq!(store.wishlist_count(), 1);
    }

    #[test]
    fn test_snapshot() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(product(&catalog, JACKET), 2, Some("M"));
        store.add_to_wishlist(product(&catalog, TOTE));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.cart.len(), 1);
        assert_eq!(snapshot.cart[0].line_total, Money::from_major(2998, Currency::INR));
        assert_eq!(snapshot.wishlist[0].product_id, TOTE);
        assert_eq!(snapshot.cart_items_count, 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["cart"][0]["size"], "M");
    }
}
