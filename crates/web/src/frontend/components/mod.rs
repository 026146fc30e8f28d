//! Presentational components shared by the pages.

pub mod modal;
pub mod product_card;
pub mod product_detail;

pub use modal::Modal;
pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
