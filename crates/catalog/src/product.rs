use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Product identifier, assigned by the remote catalog API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A catalog product as returned by the remote API.
///
/// Immutable once fetched. The cart holds independent snapshots, so two
/// copies of the same product never share state. Fields the API sends
/// beyond these are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    /// Check the record-level invariants the remote payload is expected to
    /// uphold: a non-empty title and a non-negative price.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.is_empty() {
            return Err(DomainError::validation("product title must not be empty"));
        }
        if !(self.price >= 0.0) {
            return Err(DomainError::validation(format!(
                "product price must be non-negative (got {})",
                self.price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(1),
            title: title.to_string(),
            description: String::new(),
            price,
            category: "misc".to_string(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        assert!(product("Widget", 9.99).validate().is_ok());
        assert!(product("Free Sample", 0.0).validate().is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = product("Widget", -1.0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn nan_price_is_rejected() {
        assert!(product("Widget", f64::NAN).validate().is_err());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = product("", 10.0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let raw = r#"{
            "id": 7,
            "title": "Widget",
            "description": "A widget.",
            "price": 12.5,
            "category": "tools",
            "thumbnail": "https://example.com/7.png",
            "rating": 4.3,
            "stock": 120,
            "images": ["https://example.com/7-1.png"]
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.title, "Widget");
        assert_eq!(product.price, 12.5);
        assert_eq!(product.category, "tools");
    }

    #[test]
    fn decode_defaults_optional_fields() {
        let raw = r#"{"id": 1, "title": "Bare", "price": 3.0, "category": "misc"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.thumbnail, "");
    }
}
