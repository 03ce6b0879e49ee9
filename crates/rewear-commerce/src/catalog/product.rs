//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Size label meaning the product comes in a single size.
pub const ONE_SIZE: &str = "One Size";

/// A product in the catalog.
///
/// Products are immutable once loaded; the catalog, cart and wishlist
/// share them behind `Arc`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount.
    pub original_price: Money,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub category: Category,
    /// One-line upcycling story (e.g. "Made from vintage saree fabrics").
    pub story: String,
    /// Artisan or collective credited on listings.
    pub artisan: String,
    pub is_new: bool,
    /// Discount in percent, as advertised.
    pub discount: u8,
    pub description: String,
    pub materials: Vec<String>,
    /// Size labels. Empty means one size.
    pub sizes: Vec<String>,
    pub features: Vec<String>,
    pub care: Vec<String>,
    /// Image URLs; the first is the listing image.
    pub images: Vec<String>,
    pub artisan_details: ArtisanDetails,
}

/// Background on the artisan who made a product.
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanDetails {
    pub name: String,
    pub location: String,
    pub experience: String,
    pub specialty: String,
}

impl Product {
    /// Create a product with empty narrative fields.
    ///
    /// Catalog data normally comes from [`Catalog::from_json_str`]; this is
    /// the starting point for the `with_*` builders.
    ///
    /// [`Catalog::from_json_str`]: crate::catalog::Catalog::from_json_str
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: price,
            rating: 0.0,
            reviews: 0,
            category,
            story: String::new(),
            artisan: String::new(),
            is_new: false,
            discount: 0,
            description: String::new(),
            materials: Vec::new(),
            sizes: Vec::new(),
            features: Vec::new(),
            care: Vec::new(),
            images: Vec::new(),
            artisan_details: ArtisanDetails::default(),
        }
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = original_price;
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    pub fn with_artisan(mut self, artisan: impl Into<String>) -> Self {
        self.artisan = artisan.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_materials<S: Into<String>>(
        mut self,
        materials: impl IntoIterator<Item = S>,
    ) -> Self {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a size has to be picked before adding to the cart.
    pub fn requires_size(&self) -> bool {
        match self.sizes.as_slice() {
            [] => false,
            [only] => only != ONE_SIZE,
            _ => true,
        }
    }

    /// Check if `size` is one of this product's labels.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product sells below its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.amount_minor > self.price.amount_minor
    }

    /// Amount saved against the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        self.is_on_sale().then(|| {
            Money::new(
                self.original_price.amount_minor - self.price.amount_minor,
                self.price.currency,
            )
        })
    }
}
