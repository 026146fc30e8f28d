//! Full product detail shown inside the modal.

use leptos::*;

use storefront_catalog::Product;

#[component]
pub fn ProductDetail(product: Product) -> impl IntoView {
    view! {
        <div class="product-detail">
            <h2>{product.title.clone()}</h2>
            <img src=product.thumbnail.clone() alt=product.title.clone()/>
            <p class="price">{format!("${}", product.price)}</p>
            <p>{product.description.clone()}</p>
        </div>
    }
}
