//! The filter/sort/paginate pipeline behind the catalog view.

use crate::criteria::{ALL_CATEGORIES, Criteria, NameSort, PriceRange, PriceSort};
use crate::product::Product;

/// Number of products shown per catalog page.
pub const PAGE_SIZE: usize = 20;

/// Apply the criteria tuple to the full product set.
///
/// Stages run in a fixed order (search, category, price range, price
/// sort, name sort), each on the output of the previous. Both sorts are
/// stable; a non-default name sort re-sorts the price-sorted sequence, so
/// its ordering wins except where title keys tie.
pub fn filter_and_sort(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    if !criteria.query.is_empty() {
        let query = criteria.query.to_lowercase();
        filtered.retain(|p| p.title.to_lowercase().contains(&query));
    }

    if criteria.category != ALL_CATEGORIES {
        filtered.retain(|p| p.category == criteria.category);
    }

    if criteria.price_range != PriceRange::All {
        filtered.retain(|p| criteria.price_range.contains(p.price));
    }

    match criteria.price_sort {
        PriceSort::Default => {}
        PriceSort::Ascending => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        PriceSort::Descending => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    match criteria.name_sort {
        NameSort::Default => {}
        NameSort::Ascending => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        NameSort::Descending => {
            filtered.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
    }

    filtered
}

/// Total number of pages for `len` filtered products.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The 1-based `page` slice of the filtered sequence.
///
/// An out-of-range page yields an empty slice; the caller's page number is
/// never clamped.
pub fn page_slice(filtered: &[Product], page: usize) -> &[Product] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(filtered.len());
    &filtered[start..end]
}
