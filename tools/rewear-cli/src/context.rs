//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rewear_commerce::catalog::Catalog;
use rewear_commerce::search::PriceRange;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Resolved catalog file.
    pub catalog_path: PathBuf,
}

impl Context {
    /// Load context from the config file and flags.
    ///
    /// A catalog path from `--catalog` is relative to the working directory;
    /// one from a config file is relative to that file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_file = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            None => CliConfig::find(&cwd),
        };

        let (config, base_dir) = match config_file {
            Some(path) => {
                let config = CliConfig::load(&path)?;
                tracing::debug!(config = %path.display(), "loaded config");
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                (config, base)
            }
            None => (CliConfig::default(), cwd.clone()),
        };

        let catalog_path = match catalog_override {
            Some(path) => resolve_path(&cwd, path),
            None => resolve_path(&base_dir, &config.catalog.path),
        };

        Ok(Self {
            config,
            output,
            cwd,
            catalog_path,
        })
    }

    /// Load and validate the catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::load(&self.catalog_path)
            .with_context(|| format!("Failed to load catalog: {}", self.catalog_path.display()))?;
        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.len(),
            self.catalog_path.display()
        ));
        Ok(catalog)
    }

    /// Price buckets for a catalog's currency.
    pub fn price_ranges(&self, catalog: &Catalog) -> Vec<PriceRange> {
        self.config.price_ranges(catalog.currency())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/srv/shop");
        assert_eq!(resolve_path(base, "catalog.json"), PathBuf::from("/srv/shop/catalog.json"));
        assert_eq!(resolve_path(base, "/data/c.json"), PathBuf::from("/data/c.json"));
    }

    #[test]
    fn test_catalog_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("rewear.toml");
        std::fs::write(&config, "[catalog]\npath = \"data/products.json\"\n").unwrap();

        let ctx = Context::load(config.to_str(), None, Output::new(false, false)).unwrap();
        assert_eq!(ctx.catalog_path, dir.path().join("data/products.json"));
    }

    #[test]
    fn test_missing_catalog_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let ctx = Context::load(None, missing.to_str(), Output::new(false, true)).unwrap();

        let err = ctx.load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("nope.json"));
    }
}
