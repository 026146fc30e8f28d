//! `sessionStorage`-backed session store.

use tracing::warn;

use storefront_cart::SessionStore;

/// Session store over the browser tab's `sessionStorage`.
///
/// Cleared by the browser when the session ends. Reads and writes are
/// synchronous; concurrent tabs are last-writer-wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSession;

impl WebSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl SessionStore for WebSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!("sessionStorage unavailable; cart not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!("failed to write sessionStorage key {key}");
        }
    }
}
