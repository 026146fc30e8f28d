//! `storefront-web`
//!
//! **Responsibility:** Browser frontend for the storefront catalog.
//!
//! This crate provides:
//! - The Leptos CSR application (catalog grid, filters, pagination, detail
//!   modal, cart view) behind routes `/` and `/cart`
//! - The `sessionStorage`-backed session store used by the cart
//!
//! The frontend is a **thin shell** around the catalog/cart/client crates;
//! everything with behavior worth testing lives there and is exercised by
//! native tests.

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
pub mod session;
