//! Filter/sort criteria tuple and its selector labels.
//!
//! The selector enums carry the exact labels the UI binds to its `<select>`
//! options, so `as_str`/`FromStr` round-trip through the DOM unchanged.

use core::str::FromStr;

use storefront_core::DomainError;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Price-range buckets offered by the price filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    All,
    /// `[10, 50]`, both ends inclusive.
    TenToFifty,
    /// `(50, 100]`, upper end inclusive.
    FiftyToHundred,
    /// `(100, ∞)`.
    OverHundred,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "All",
            PriceRange::TenToFifty => "10-50",
            PriceRange::FiftyToHundred => "50-100",
            PriceRange::OverHundred => "100+",
        }
    }

    /// Whether `price` falls inside this bucket.
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::TenToFifty => price >= 10.0 && price <= 50.0,
            PriceRange::FiftyToHundred => price > 50.0 && price <= 100.0,
            PriceRange::OverHundred => price > 100.0,
        }
    }
}

impl FromStr for PriceRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(PriceRange::All),
            "10-50" => Ok(PriceRange::TenToFifty),
            "50-100" => Ok(PriceRange::FiftyToHundred),
            "100+" => Ok(PriceRange::OverHundred),
            other => Err(DomainError::invalid_value(format!("price range: {other}"))),
        }
    }
}

/// Price sort direction; `Default` preserves the incoming order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceSort {
    #[default]
    Default,
    Ascending,
    Descending,
}

impl PriceSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSort::Default => "default",
            PriceSort::Ascending => "price-asc",
            PriceSort::Descending => "price-desc",
        }
    }
}

impl FromStr for PriceSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(PriceSort::Default),
            "price-asc" => Ok(PriceSort::Ascending),
            "price-desc" => Ok(PriceSort::Descending),
            other => Err(DomainError::invalid_value(format!("price sort: {other}"))),
        }
    }
}

/// Name sort direction; `Default` preserves the incoming order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameSort {
    #[default]
    Default,
    Ascending,
    Descending,
}

impl NameSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameSort::Default => "default",
            NameSort::Ascending => "name-asc",
            NameSort::Descending => "name-desc",
        }
    }
}

impl FromStr for NameSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NameSort::Default),
            "name-asc" => Ok(NameSort::Ascending),
            "name-desc" => Ok(NameSort::Descending),
            other => Err(DomainError::invalid_value(format!("name sort: {other}"))),
        }
    }
}

/// The combined filter/sort selection driving the derived catalog view.
///
/// Lives only in controller state; there is no persistence and no
/// whole-tuple reset, only per-field updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive title search text; empty means no search filter.
    pub query: String,
    /// Selected category, or [`ALL_CATEGORIES`].
    pub category: String,
    pub price_range: PriceRange,
    pub price_sort: PriceSort,
    pub name_sort: NameSort,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::All,
            price_sort: PriceSort::Default,
            name_sort: NameSort::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_labels_round_trip() {
        for range in [
            PriceRange::All,
            PriceRange::TenToFifty,
            PriceRange::FiftyToHundred,
            PriceRange::OverHundred,
        ] {
            assert_eq!(range.as_str().parse::<PriceRange>().unwrap(), range);
        }
    }

    #[test]
    fn sort_labels_round_trip() {
        for sort in [PriceSort::Default, PriceSort::Ascending, PriceSort::Descending] {
            assert_eq!(sort.as_str().parse::<PriceSort>().unwrap(), sort);
        }
        for sort in [NameSort::Default, NameSort::Ascending, NameSort::Descending] {
            assert_eq!(sort.as_str().parse::<NameSort>().unwrap(), sort);
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!("200+".parse::<PriceRange>().is_err());
        assert!("price-up".parse::<PriceSort>().is_err());
        assert!("".parse::<NameSort>().is_err());
    }

    #[test]
    fn bucket_boundaries() {
        // 50 belongs to the low bucket, not the middle one.
        assert!(PriceRange::TenToFifty.contains(50.0));
        assert!(!PriceRange::FiftyToHundred.contains(50.0));

        // 100 belongs to the middle bucket, not the upper one.
        assert!(PriceRange::FiftyToHundred.contains(100.0));
        assert!(!PriceRange::OverHundred.contains(100.0));

        assert!(PriceRange::TenToFifty.contains(10.0));
        assert!(!PriceRange::TenToFifty.contains(9.99));
        assert!(PriceRange::OverHundred.contains(100.01));
    }

    #[test]
    fn default_criteria_selects_everything() {
        let criteria = Criteria::default();
        assert_eq!(criteria.category, ALL_CATEGORIES);
        assert!(criteria.query.is_empty());
        assert_eq!(criteria.price_range, PriceRange::All);
        assert_eq!(criteria.price_sort, PriceSort::Default);
        assert_eq!(criteria.name_sort, NameSort::Default);
    }
}
