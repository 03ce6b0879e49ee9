//! Search results.

use crate::catalog::Product;
use std::sync::Arc;

/// Result of a search-as-you-type query.
///
/// `Idle` means the query was blank and no search is running, which a
/// front end shows differently from a search that found nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    Idle,
    Matches(Vec<&'a Arc<Product>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }

    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }

    /// Matching products in catalog order; empty when idle.
    pub fn results(&self) -> &[&'a Arc<Product>] {
        match self {
            SearchOutcome::Idle => &[],
            SearchOutcome::Matches(products) => products,
        }
    }
}
