//! Search module.
//!
//! Contains free-text search, shop listing filters, and sort orders.

mod filter;
mod query;
mod results;
mod sort;

pub use filter::{PriceRange, ShopFilter};
pub use query::{search, SearchSession};
pub use results::SearchOutcome;
pub use sort::SortOption;
