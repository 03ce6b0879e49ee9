//! Free-text product search.

use crate::catalog::{Catalog, Product};
use crate::search::SearchOutcome;
use serde::{Deserialize, Serialize};

/// Search the catalog for a free-text query.
///
/// The query is trimmed and lowercased; a blank query yields
/// [`SearchOutcome::Idle`]. Otherwise every product whose name,
/// description, category, artisan, story, materials or features contain
/// the query as a substring matches, in catalog order.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> SearchOutcome<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::Idle;
    }

    let matches: Vec<_> = catalog
        .iter()
        .filter(|product| matches_text(product, &needle))
        .collect();
    tracing::trace!(query = %needle, matches = matches.len(), "searched catalog");
    SearchOutcome::Matches(matches)
}

/// `needle` must already be lowercase.
fn matches_text(product: &Product, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&product.name)
        || contains(&product.description)
        || contains(product.category.as_str())
        || contains(&product.artisan)
        || contains(&product.story)
        || product.materials.iter().any(|m| contains(m))
        || product.features.iter().any(|f| contains(f))
}

/// The live query behind a search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSession {
    query: String,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The query as typed, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Results for the current query, recomputed against `catalog`.
    pub fn outcome<'a>(&self, catalog: &'a Catalog) -> SearchOutcome<'a> {
        search(catalog, &self.query)
    }
}
