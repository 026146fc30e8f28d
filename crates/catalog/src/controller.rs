//! Catalog view state: load lifecycle, criteria, derived page.

use tracing::warn;

use crate::criteria::{ALL_CATEGORIES, Criteria, NameSort, PriceRange, PriceSort};
use crate::product::Product;
use crate::source::ProductSource;
use crate::view::{filter_and_sort, page_slice, total_pages};

/// User-visible message for any fetch failure.
const FETCH_ERROR: &str = "Failed to fetch products.";

/// Load lifecycle of the catalog view.
///
/// There is no transition back to `Loading`; a fresh controller is a
/// fresh mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Holds the fetched product set and the derived filtered/sorted/paginated
/// view; recomputes the view whenever a criteria field changes.
///
/// The cached filtered sequence is always `filter_and_sort(products,
/// criteria)`: derived state only, kept so every render does not redo the
/// pipeline.
#[derive(Debug, Clone)]
pub struct CatalogController {
    products: Vec<Product>,
    filtered: Vec<Product>,
    categories: Vec<String>,
    criteria: Criteria,
    page: usize,
    phase: LoadPhase,
}

impl CatalogController {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            categories: Vec::new(),
            criteria: Criteria::default(),
            page: 1,
            phase: LoadPhase::Idle,
        }
    }

    /// Fetch the catalog once and settle into `Ready` or `Failed`.
    ///
    /// View layers that must mutate state around their own await point can
    /// drive [`begin_loading`](Self::begin_loading),
    /// [`ingest`](Self::ingest) and [`fail`](Self::fail) directly; this
    /// method composes the same three steps.
    pub async fn load<S: ProductSource>(&mut self, source: &S) {
        self.begin_loading();
        match source.fetch_products().await {
            Ok(products) => self.ingest(products),
            Err(err) => {
                warn!("catalog fetch failed: {err}");
                self.fail();
            }
        }
    }

    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Accept a fetched product set and derive the initial view.
    ///
    /// Records that fail validation are dropped with a warning; the remote
    /// payload is not trusted to uphold its own invariants.
    pub fn ingest(&mut self, products: Vec<Product>) {
        let mut accepted = Vec::with_capacity(products.len());
        for product in products {
            match product.validate() {
                Ok(()) => accepted.push(product),
                Err(err) => warn!(product_id = %product.id, "rejected product record: {err}"),
            }
        }

        self.categories = derive_categories(&accepted);
        self.filtered = accepted.clone();
        self.products = accepted;
        self.phase = LoadPhase::Ready;
    }

    /// Record a fetch failure; the view shows one generic message.
    pub fn fail(&mut self) {
        self.phase = LoadPhase::Failed(FETCH_ERROR.to_string());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.criteria_changed();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.criteria.category = category.into();
        self.criteria_changed();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.criteria.price_range = range;
        self.criteria_changed();
    }

    pub fn set_price_sort(&mut self, sort: PriceSort) {
        self.criteria.price_sort = sort;
        self.criteria_changed();
    }

    pub fn set_name_sort(&mut self, sort: NameSort) {
        self.criteria.name_sort = sort;
        self.criteria_changed();
    }

    /// Set the current page.
    ///
    /// The page is never clamped; an out-of-range page simply shows an
    /// empty grid until a criteria change resets it.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Distinct categories in first-seen order, prefixed with the
    /// [`ALL_CATEGORIES`] sentinel. Empty until a successful load.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The current page of the filtered view.
    pub fn page_items(&self) -> &[Product] {
        page_slice(&self.filtered, self.page)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len())
    }

    /// Every criteria change resets to the first page and recomputes the
    /// filtered view synchronously.
    fn criteria_changed(&mut self) {
        self.page = 1;
        self.filtered = filter_and_sort(&self.products, &self.criteria);
    }
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
