//! `storefront-cart` — session-scoped shopping cart over an injectable
//! session store.
//!
//! The store seam ([`SessionStore`]) keeps the cart testable natively; the
//! browser frontend plugs in its `sessionStorage` implementation.

pub mod cart;
pub mod store;

pub use cart::{CART_KEY, CartStore};
pub use store::{MemorySession, SessionStore};
