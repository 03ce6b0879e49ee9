//! Shopping cart module.
//!
//! Contains the cart, the wishlist, the session store over both, and
//! the order summary.

#[allow(clippy::module_inception)]
mod cart;
mod store;
mod summary;
mod wishlist;

pub use cart::{Cart, CartItem};
pub use store::{CartLine, SessionSnapshot, Store, WishlistLine};
pub use summary::{ChargeRates, OrderSummary};
pub use wishlist::{Wishlist, WishlistItem};
