//! Session-scoped shopping cart.

use tracing::warn;

use storefront_catalog::Product;

use crate::store::SessionStore;

/// Session storage key holding the JSON-encoded cart.
pub const CART_KEY: &str = "cart";

/// Ordered list of product snapshots, persisted whole under [`CART_KEY`].
///
/// Duplicates are allowed; adding the same product twice appends two
/// snapshots. Removal is positional; callers render only existing rows,
/// so a stale index across concurrent views is their responsibility.
#[derive(Debug)]
pub struct CartStore<S: SessionStore> {
    session: S,
    items: Vec<Product>,
}

impl<S: SessionStore> CartStore<S> {
    /// Read the cart from the session, once.
    ///
    /// An absent key is an empty cart. Unparsable data is dropped with a
    /// warning and treated as empty.
    pub fn load(session: S) -> Self {
        let items = match session.get(CART_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!("discarding malformed session cart: {err}");
                    Vec::new()
                }
            },
        };
        Self { session, items }
    }

    /// Append a product snapshot and persist.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
        self.persist();
    }

    /// Remove the entry at `index` and persist; out-of-bounds is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        self.persist();
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(raw) => self.session.set(CART_KEY, &raw),
            Err(err) => warn!("failed to encode session cart: {err}"),
        }
    }
}
