//! Listing filters for the shop page.

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::PriceRangeId;
use crate::money::{Currency, Money};
use crate::search::SortOption;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A price bucket with inclusive bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub id: PriceRangeId,
    pub label: String,
    pub min: Money,
    /// `None` for an open-ended bucket.
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn new(
        id: impl Into<PriceRangeId>,
        label: impl Into<String>,
        min: Money,
        max: Option<Money>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min,
            max,
        }
    }

    /// The storefront's buckets, in whole major units of `currency`.
    pub fn defaults(currency: Currency) -> Vec<PriceRange> {
        let major = |amount| Money::from_major(amount, currency);
        let symbol = currency.symbol();
        vec![
            PriceRange::new("under-500", format!("Under {symbol}500"), major(0), Some(major(500))),
            PriceRange::new(
                "500-1000",
                format!("{symbol}500 - {symbol}1000"),
                major(500),
                Some(major(1000)),
            ),
            PriceRange::new(
                "1000-2000",
                format!("{symbol}1000 - {symbol}2000"),
                major(1000),
                Some(major(2000)),
            ),
            PriceRange::new("above-2000", format!("Above {symbol}2000"), major(2000), None),
        ]
    }

    pub fn contains(&self, price: &Money) -> bool {
        price.amount_minor >= self.min.amount_minor
            && self.max.map_or(true, |max| price.amount_minor <= max.amount_minor)
    }
}

/// The shop page's filter state: a category, price buckets, and a sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopFilter {
    pub category: CategoryFilter,
    /// Selected buckets. A product passes if it is in any of them.
    pub price_ranges: Vec<PriceRangeId>,
    pub sort: SortOption,
}

impl ShopFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price_range(mut self, id: impl Into<PriceRangeId>) -> Self {
        let id = id.into();
        if !self.price_ranges.contains(&id) {
            self.price_ranges.push(id);
        }
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Select a bucket, or deselect it if already selected.
    pub fn toggle_price_range(&mut self, id: impl Into<PriceRangeId>) {
        let id = id.into();
        if let Some(position) = self.price_ranges.iter().position(|r| *r == id) {
            self.price_ranges.remove(position);
        } else {
            self.price_ranges.push(id);
        }
    }

    /// Reset category and price selections, keeping the sort.
    pub fn clear(&mut self) {
        self.category = CategoryFilter::All;
        self.price_ranges.clear();
    }

    /// Number of active selections, for the filter badge.
    pub fn active_filter_count(&self) -> usize {
        self.price_ranges.len() + usize::from(!self.category.is_all())
    }

    /// Check that every selected bucket exists in `ranges`.
    pub fn validate(&self, ranges: &[PriceRange]) -> Result<(), CommerceError> {
        match self
            .price_ranges
            .iter()
            .find(|id| !ranges.iter().any(|r| r.id == **id))
        {
            Some(unknown) => Err(CommerceError::UnknownPriceRange(unknown.to_string())),
            None => Ok(()),
        }
    }

    /// Category filter, then price filter, then sort.
    ///
    /// Selected ids missing from `ranges` match nothing. The catalog is
    /// left in its own order.
    pub fn apply<'a>(&self, catalog: &'a Catalog, ranges: &[PriceRange]) -> Vec<&'a Arc<Product>> {
        let selected: Vec<&PriceRange> = ranges
            .iter()
            .filter(|r| self.price_ranges.contains(&r.id))
            .collect();
        let price_filtering = !self.price_ranges.is_empty();

        let mut products: Vec<&Arc<Product>> = catalog
            .iter()
            .filter(|p| self.category.matches(p.category))
            .filter(|p| !price_filtering || selected.iter().any(|r| r.contains(&p.price)))
            .collect();
        self.sort.sort(&mut products);

        tracing::trace!(
            category = self.category.as_str(),
            price_ranges = self.price_ranges.len(),
            sort = self.sort.as_str(),
            matches = products.len(),
            "applied shop filter"
        );
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;

    fn product(id: u32, price: i64, category: Category) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::from_major(price, Currency::INR),
            category,
        )
    }

    fn catalog() -> Catalog {
        Catalog::from_products(
            Currency::INR,
            vec![
                product(1, 1499, Category::Clothing),
                product(2, 899, Category::Clothing),
                product(3, 599, Category::Accessories),
                product(4, 1000, Category::HomeDecor),
                product(5, 449, Category::HomeDecor),
                product(6, 2499, Category::Clothing),
            ],
        )
        .unwrap()
    }

    fn ids(products: &[&Arc<Product>]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        assert_eq!(ids(&ShopFilter::new().apply(&catalog, &ranges)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new().with_category(Category::HomeDecor);
        assert_eq!(ids(&filter.apply(&catalog, &ranges)), vec![4, 5]);
    }

    #[test]
    fn test_overlapping_buckets_union_once() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new()
            .with_price_range("500-1000")
            .with_price_range("1000-2000");
        // 1000 sits on both bounds and appears once
        assert_eq!(ids(&filter.apply(&catalog, &ranges)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_open_ended_bucket() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new().with_price_range("above-2000");
        assert_eq!(ids(&filter.apply(&catalog, &ranges)), vec![6]);
    }

    #[test]
    fn test_category_and_price_combine() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new()
            .with_category(Category::Clothing)
            .with_price_range("500-1000");
        assert_eq!(ids(&filter.apply(&catalog, &ranges)), vec![2]);
    }

    #[test]
    fn test_sort_applies_to_filtered_set() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new()
            .with_category(Category::Clothing)
            .with_sort(SortOption::PriceLow);
        assert_eq!(ids(&filter.apply(&catalog, &ranges)), vec![2, 1, 6]);

        // the catalog itself keeps featured order
        let order: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_bucket_matches_nothing() {
        let catalog = catalog();
        let ranges = PriceRange::defaults(Currency::INR);
        let filter = ShopFilter::new().with_price_range("luxury");
        assert!(filter.apply(&catalog, &ranges).is_empty());
        assert!(matches!(
            filter.validate(&ranges),
            Err(CommerceError::UnknownPriceRange(ref id)) if id == "luxury"
        ));
    }

    #[test]
    fn test_toggle_and_badge_count() {
        let mut filter = ShopFilter::new();
        assert_eq!(filter.active_filter_count(), 0);

        filter.toggle_price_range("under-500");
        filter.category = CategoryFilter::Only(Category::Accessories);
        assert_eq!(filter.active_filter_count(), 2);

        filter.toggle_price_range("under-500");
        assert!(filter.price_ranges.is_empty());
        assert_eq!(filter.active_filter_count(), 1);

        filter.clear();
        assert_eq!(filter.active_filter_count(), 0);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = &PriceRange::defaults(Currency::INR)[1];
        assert!(range.contains(&Money::from_major(500, Currency::INR)));
        assert!(range.contains(&Money::from_major(1000, Currency::INR)));
        assert!(!range.contains(&Money::new(100_001, Currency::INR)));
    }
}
