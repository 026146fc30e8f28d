//! Product card shown in the catalog grid.

use leptos::*;

use storefront_cart::CartStore;
use storefront_catalog::Product;

use crate::session::WebSession;

/// One grid cell: thumbnail, title, price, description, and the
/// "Details" / "Add to Cart" actions.
#[component]
pub fn ProductCard(product: Product, #[prop(into)] on_details: Callback<Product>) -> impl IntoView {
    let detail_product = product.clone();
    let cart_product = product.clone();

    let add_to_cart = move |_| {
        let mut cart = CartStore::load(WebSession::new());
        cart.add(cart_product.clone());
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "{} has been added to your cart!",
                cart_product.title
            ));
        }
    };

    view! {
        <div class="product-card">
            <img src=product.thumbnail.clone() alt=product.title.clone()/>
            <p class="title">{product.title.clone()}</p>
            <p class="price">{format!("${}", product.price)}</p>
            <p class="description">{product.description.clone()}</p>
            <div class="actions">
                <button type="button" on:click=move |_| on_details.call(detail_product.clone())>
                    "Details"
                </button>
                <button type="button" on:click=add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
