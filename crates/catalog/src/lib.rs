//! `storefront-catalog` — product model, criteria tuple, and the
//! filter/sort/paginate pipeline behind the catalog view.
//!
//! The pipeline ([`filter_and_sort`] plus the pagination helpers) is a pure
//! function of the full product set and the criteria tuple;
//! [`CatalogController`] wraps it with the load lifecycle and the current
//! page so a view layer only has to render what the controller derives.

pub mod controller;
pub mod criteria;
pub mod product;
pub mod source;
pub mod view;

pub use controller::{CatalogController, LoadPhase};
pub use criteria::{ALL_CATEGORIES, Criteria, NameSort, PriceRange, PriceSort};
pub use product::{Product, ProductId};
pub use source::ProductSource;
pub use view::{PAGE_SIZE, filter_and_sort, page_slice, total_pages};
