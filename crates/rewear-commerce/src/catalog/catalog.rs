//! The read-only product catalog and its JSON loader.

use crate::catalog::{ArtisanDetails, Category, CategoryCount, CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Related products shown on a product page.
pub const RELATED_LIMIT: usize = 3;

/// Products highlighted on the landing page.
pub const FEATURED_LIMIT: usize = 3;

/// An ordered, immutable list of products.
///
/// Catalog order is the "featured" order of the shop listing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    currency: Currency,
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique, ratings are within
    /// 0..=5 and every price is in `currency`.
    pub fn from_products(
        currency: Currency,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, CommerceError> {
        let mut catalog = Catalog {
            currency,
            products: Vec::new(),
            index: HashMap::new(),
        };

        for product in products {
            if catalog.index.contains_key(&product.id) {
                return Err(CommerceError::DuplicateProductId(product.id.get()));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CommerceError::InvalidRating {
                    product_id: product.id.get(),
                    rating: product.rating,
                });
            }
            for price in [&product.price, &product.original_price] {
                if price.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency.code().to_string(),
                        got: price.currency.code().to_string(),
                    });
                }
            }
            catalog.index.insert(product.id, catalog.products.len());
            catalog.products.push(Arc::new(product));
        }

        tracing::debug!(
            products = catalog.products.len(),
            currency = %currency,
            "catalog built"
        );
        Ok(catalog)
    }

    /// Parse a catalog document.
    ///
    /// Prices are integer minor units; `currency` defaults to INR.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let currency = match document.currency.as_deref() {
            None => Currency::default(),
            Some(code) => Currency::from_code(code).ok_or_else(|| {
                CommerceError::SerializationError(format!("unknown currency code: {code}"))
            })?,
        };
        let products = document
            .products
            .into_iter()
            .map(|record| record.into_product(currency));
        Self::from_products(currency, products)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.index.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Like [`get`](Self::get), but a missing id is an error.
    pub fn require(&self, id: ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id.get()))
    }

    /// Product counts for "all" followed by each category.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts = Vec::with_capacity(Category::ALL.len() + 1);
        counts.push(CategoryCount {
            filter: CategoryFilter::All,
            name: CategoryFilter::All.display_name(),
            count: self.products.len(),
        });
        for category in Category::ALL {
            counts.push(CategoryCount {
                filter: CategoryFilter::Only(category),
                name: category.display_name(),
                count: self.iter().filter(|p| p.category == category).count(),
            });
        }
        counts
    }

    /// Up to `limit` other products from the same category, in catalog order.
    ///
    /// Returns nothing for an unknown id.
    pub fn related(&self, id: ProductId, limit: usize) -> Vec<&Arc<Product>> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.iter()
            .filter(|p| p.category == product.category && p.id != id)
            .take(limit)
            .collect()
    }

    /// The first `limit` products.
    pub fn featured(&self, limit: usize) -> &[Arc<Product>] {
        &self.products[..limit.min(self.products.len())]
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    currency: Option<String>,
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: u32,
    name: String,
    price: i64,
    #[serde(default)]
    original_price: Option<i64>,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    reviews: u32,
    category: Category,
    #[serde(default)]
    story: String,
    #[serde(default)]
    artisan: String,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    discount: u8,
    #[serde(default)]
    description: String,
    #[serde(default)]
    materials: Vec<String>,
    #[serde(default)]
    sizes: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    care: Vec<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    artisan_details: ArtisanDetails,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Product {
        let price = Money::new(self.price, currency);
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            original_price: self
                .original_price
                .map(|amount| Money::new(amount, currency))
                .unwrap_or(price),
            rating: self.rating,
            reviews: self.reviews,
            category: self.category,
            story: self.story,
            artisan: self.artisan,
            is_new: self.is_new,
            discount: self.discount,
            description: self.description,
            materials: self.materials,
            sizes: self.sizes,
            features: self.features,
            care: self.care,
            images: self.images,
            artisan_details: self.artisan_details,
        }
    }
}
