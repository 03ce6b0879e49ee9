//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rewear_commerce::search::{PriceRange, SortOption};
use rewear_commerce::{cart::ChargeRates, Currency, Money};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["rewear.toml", ".rewear.toml", "rewear.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout charges.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Shop listing settings.
    #[serde(default)]
    pub shop: ShopConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Find the nearest config file, walking up from `start`.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }

    fn validate(&self) -> Result<()> {
        if self.checkout.tax_rate_percent > 100 {
            bail!(
                "checkout.tax_rate_percent must be at most 100, got {}",
                self.checkout.tax_rate_percent
            );
        }
        if self.checkout.shipping_flat < 0 {
            bail!("checkout.shipping_flat must not be negative");
        }
        for range in &self.shop.price_ranges {
            if range.max.is_some_and(|max| max < range.min) {
                bail!("price range {} has max below min", range.id);
            }
        }
        Ok(())
    }

    /// Tax and shipping for order summaries.
    pub fn charge_rates(&self) -> ChargeRates {
        ChargeRates {
            tax_rate_percent: self.checkout.tax_rate_percent,
            shipping_major: if self.checkout.free_shipping {
                0
            } else {
                self.checkout.shipping_flat
            },
        }
    }

    /// Configured price buckets, or the storefront defaults.
    pub fn price_ranges(&self, currency: Currency) -> Vec<PriceRange> {
        if self.shop.price_ranges.is_empty() {
            return PriceRange::defaults(currency);
        }
        self.shop
            .price_ranges
            .iter()
            .map(|r| {
                PriceRange::new(
                    r.id.as_str(),
                    r.label.clone(),
                    Money::from_major(r.min, currency),
                    r.max.map(|max| Money::from_major(max, currency)),
                )
            })
            .collect()
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON, relative to the config file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Checkout charges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Tax in whole percent (default: 18).
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: u32,

    /// Whether shipping is free (default: true).
    #[serde(default = "default_true")]
    pub free_shipping: bool,

    /// Flat shipping in major units when shipping is not free.
    #[serde(default)]
    pub shipping_flat: i64,
}

fn default_tax_rate() -> u32 {
    18
}

fn default_true() -> bool {
    true
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: default_tax_rate(),
            free_shipping: true,
            shipping_flat: 0,
        }
    }
}

/// Shop listing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Sort used when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortOption,

    /// Price buckets; empty means the storefront defaults.
    #[serde(default)]
    pub price_ranges: Vec<PriceRangeConfig>,
}

/// One price bucket, in whole major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRangeConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.catalog.path, "catalog.json");
        assert_eq!(config.charge_rates(), ChargeRates::default());
        assert_eq!(config.price_ranges(Currency::INR).len(), 4);
        assert_eq!(config.shop.default_sort, SortOption::Featured);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewear.toml");
        std::fs::write(
            &path,
            r#"
[checkout]
tax_rate_percent = 12
free_shipping = false
shipping_flat = 49

[shop]
default_sort = "price-low"

[[shop.price_ranges]]
id = "budget"
label = "Budget"
max = 700
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        let rates = config.charge_rates();
        assert_eq!(rates.tax_rate_percent, 12);
        assert_eq!(rates.shipping_major, 49);
        assert_eq!(config.shop.default_sort, SortOption::PriceLow);

        let ranges = config.price_ranges(Currency::INR);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].max, Some(Money::from_major(700, Currency::INR)));
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewear.json");
        std::fs::write(&path, r#"{ "catalog": { "path": "data/products.json" } }"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.catalog.path, "data/products.json");
        assert_eq!(config.checkout.tax_rate_percent, 18);
    }

    #[test]
    fn test_invalid_tax_rate_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewear.toml");
        std::fs::write(&path, "[checkout]\ntax_rate_percent = 150\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".rewear.toml"), "").unwrap();

        let found = CliConfig::find(&nested).unwrap();
        assert_eq!(found, dir.path().join(".rewear.toml"));
    }
}
