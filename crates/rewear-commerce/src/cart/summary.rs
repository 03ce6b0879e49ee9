//! Order summary shown on the cart and checkout pages.

use crate::cart::Store;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Tax and shipping charged on top of the cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRates {
    /// Tax in whole percent of the subtotal.
    pub tax_rate_percent: u32,
    /// Flat shipping charge in major units. Zero means free shipping.
    pub shipping_major: i64,
}

impl Default for ChargeRates {
    fn default() -> Self {
        Self {
            tax_rate_percent: 18,
            shipping_major: 0,
        }
    }
}

/// Complete pricing breakdown for the current cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line totals.
    pub subtotal: Money,
    pub shipping: Money,
    /// Tax, rounded to whole major units.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Derive the summary from the store's current cart.
    pub fn for_store(store: &Store, rates: &ChargeRates) -> Self {
        let currency = store.currency();
        let subtotal = store.cart_total();
        let shipping = if store.is_cart_empty() {
            Money::zero(currency)
        } else {
            Money::from_major(rates.shipping_major, currency)
        };
        let tax = subtotal
            .percent_of_major(rates.tax_rate_percent)
            .unwrap_or_else(|| Money::new(i64::MAX, currency));

        Self {
            item_count: store.cart_items_count(),
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Product};
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn catalog() -> Catalog {
        Catalog::from_products(
            Currency::INR,
            vec![
                Product::new(
                    ProductId::new(1),
                    "Navigating The Sea Denim Jacket",
                    Money::from_major(1499, Currency::INR),
                    Category::Clothing,
                ),
                Product::new(
                    ProductId::new(2),
                    "Vintage Patchwork Kurta",
                    Money::from_major(899, Currency::INR),
                    Category::Clothing,
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_summary_with_default_rates() {
        let catalog = catalog();
        let mut store = Store::for_catalog(&catalog);
        store.add_to_cart(catalog.get(ProductId::new(1)).unwrap(), 1, None);
        store.add_to_cart(catalog.get(ProductId::new(2)).unwrap(), 1, None);

        let summary = OrderSummary::for_store(&store, &ChargeRates::default());
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal, Money::from_major(2398, Currency::INR));
        assert_eq!(summary.tax, Money::from_major(432, Currency::INR));
        assert_eq!(summary.grand_total, Money::from_major(2830, Currency::INR));
        assert!(summary.has_free_shipping());
    }

    #[test]
    fn test_flat_shipping_only_on_non_empty_cart() {
        let catalog = catalog();
        let rates = ChargeRates {
            tax_rate_percent: 0,
            shipping_major: 99,
        };
        let mut store = Store::for_catalog(&catalog);

        let empty = OrderSummary::for_store(&store, &rates);
        assert!(empty.grand_total.is_zero());

        store.add_to_cart(catalog.get(ProductId::new(2)).unwrap(), 1, None);
        let summary = OrderSummary::for_store(&store, &rates);
        assert_eq!(summary.shipping, Money::from_major(99, Currency::INR));
        assert_eq!(summary.grand_total, Money::from_major(998, Currency::INR));
    }
}
