//! Seam between the catalog controller and whatever fetches products.

use async_trait::async_trait;

use crate::product::Product;

/// A source of the full product catalog.
///
/// The HTTP fetch gateway is the production implementation; tests drive
/// the controller with stub sources. `?Send` because the browser build
/// runs futures on a single-threaded event loop.
#[async_trait(?Send)]
pub trait ProductSource {
    type Error: core::fmt::Display;

    /// Fetch the whole catalog in one call.
    async fn fetch_products(&self) -> Result<Vec<Product>, Self::Error>;
}
