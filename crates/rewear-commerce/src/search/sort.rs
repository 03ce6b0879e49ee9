//! Sort orders for the shop listing.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// New arrivals first.
    Newest,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
    ];

    /// Key used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest First",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Sort products in place. The sort is stable, so ties keep their
    /// incoming order.
    pub fn sort(&self, products: &mut [&Arc<Product>]) {
        match self {
            SortOption::Featured => {}
            SortOption::Newest => products.sort_by_key(|p| !p.is_new),
            SortOption::PriceLow => products.sort_by_key(|p| p.price.amount_minor),
            SortOption::PriceHigh => {
                products.sort_by(|a, b| b.price.amount_minor.cmp(&a.price.amount_minor))
            }
            SortOption::Rating => products.sort_by(|a, b| descending(a.rating, b.rating)),
        }
    }
}

fn descending(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == key)
            .ok_or(CommerceError::UnknownSortOption(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: u32, price: i64, rating: f32, is_new: bool) -> Arc<Product> {
        Arc::new(
            Product::new(
                ProductId::new(id),
                format!("Product {id}"),
                Money::from_major(price, Currency::INR),
                Category::Clothing,
            )
            .with_rating(rating, 10)
            .with_new(is_new),
        )
    }

    fn sorted_ids(option: SortOption, products: &[Arc<Product>]) -> Vec<u32> {
        let mut refs: Vec<&Arc<Product>> = products.iter().collect();
        option.sort(&mut refs);
        refs.iter().map(|p| p.id.get()).collect()
    }

    fn fixture() -> Vec<Arc<Product>> {
        vec![
            product(1, 1499, 4.8, true),
            product(2, 899, 4.9, false),
            product(3, 599, 4.7, false),
            product(4, 1299, 4.9, true),
        ]
    }

    #[test]
    fn test_price_high() {
        let products = &fixture()[..3];
        assert_eq!(sorted_ids(SortOption::PriceHigh, products), vec![1, 2, 3]);
    }

    #[test]
    fn test_price_low() {
        assert_eq!(sorted_ids(SortOption::PriceLow, &fixture()), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_rating_descending() {
        let products = &fixture()[..3];
        assert_eq!(sorted_ids(SortOption::Rating, products), vec![2, 1, 3]);
    }

    #[test]
    fn test_rating_ties_are_stable() {
        assert_eq!(sorted_ids(SortOption::Rating, &fixture()), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_newest_keeps_relative_order() {
        assert_eq!(sorted_ids(SortOption::Newest, &fixture()), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_featured_is_catalog_order() {
        assert_eq!(sorted_ids(SortOption::Featured, &fixture()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("price-high".parse::<SortOption>().unwrap(), SortOption::PriceHigh);
        assert_eq!(" Rating ".parse::<SortOption>().unwrap(), SortOption::Rating);
        assert!(matches!(
            "cheapest".parse::<SortOption>(),
            Err(CommerceError::UnknownSortOption(_))
        ));
    }
}
