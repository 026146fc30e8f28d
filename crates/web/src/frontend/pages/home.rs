//! Catalog page: search, filters, grid, pagination, detail modal.

use leptos::*;

use storefront_catalog::{
    CatalogController, LoadPhase, NameSort, PriceRange, PriceSort, Product,
};
use storefront_client::CatalogClient;

use crate::frontend::components::{Modal, ProductCard, ProductDetail};

/// Catalog page: one fetch on mount, then purely reactive filtering.
#[component]
pub fn HomePage() -> impl IntoView {
    let controller = create_rw_signal(CatalogController::new());
    let selected = create_rw_signal(None::<Product>);

    // The single suspension point: fetch once, then settle the controller.
    spawn_local(async move {
        controller.update(|c| c.begin_loading());
        match CatalogClient::default().fetch_products().await {
            Ok(products) => controller.update(|c| c.ingest(products)),
            Err(err) => {
                tracing::warn!("catalog fetch failed: {err}");
                controller.update(|c| c.fail());
            }
        }
    });

    let on_details = Callback::new(move |product: Product| selected.set(Some(product)));
    let close_modal = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="filters">
            <h1>"Filter and Sort Products"</h1>

            <input
                type="text"
                placeholder="Search"
                prop:value=move || controller.with(|c| c.criteria().query.clone())
                on:input=move |ev| controller.update(|c| c.set_query(event_target_value(&ev)))
            />

            <select
                prop:value=move || controller.with(|c| c.criteria().category.clone())
                on:change=move |ev| controller.update(|c| c.set_category(event_target_value(&ev)))
            >
                <For
                    each=move || controller.with(|c| c.categories().to_vec())
                    key=|category| category.clone()
                    let:category
                >
                    <option value=category.clone()>{category.clone()}</option>
                </For>
            </select>

            <select
                prop:value=move || controller.with(|c| c.criteria().price_range.as_str())
                on:change=move |ev| {
                    if let Ok(range) = event_target_value(&ev).parse::<PriceRange>() {
                        controller.update(|c| c.set_price_range(range));
                    }
                }
            >
                <option value="All">"All Prices"</option>
                <option value="10-50">"$10 - $50"</option>
                <option value="50-100">"$50 - $100"</option>
                <option value="100+">"$100+"</option>
            </select>

            <select
                prop:value=move || controller.with(|c| c.criteria().price_sort.as_str())
                on:change=move |ev| {
                    if let Ok(sort) = event_target_value(&ev).parse::<PriceSort>() {
                        controller.update(|c| c.set_price_sort(sort));
                    }
                }
            >
                <option value="default">"Sort by Price"</option>
                <option value="price-asc">"Price: Low to High"</option>
                <option value="price-desc">"Price: High to Low"</option>
            </select>

            <select
                prop:value=move || controller.with(|c| c.criteria().name_sort.as_str())
                on:change=move |ev| {
                    if let Ok(sort) = event_target_value(&ev).parse::<NameSort>() {
                        controller.update(|c| c.set_name_sort(sort));
                    }
                }
            >
                <option value="default">"Sort by Name"</option>
                <option value="name-asc">"Name: A to Z"</option>
                <option value="name-desc">"Name: Z to A"</option>
            </select>
        </div>

        {move || match controller.with(|c| c.phase().clone()) {
            LoadPhase::Idle | LoadPhase::Loading => {
                view! { <p class="status">"Loading products..."</p> }.into_view()
            }
            LoadPhase::Failed(message) => {
                view! { <p class="status error">{message}</p> }.into_view()
            }
            LoadPhase::Ready => view! {
                <div class="product-grid">
                    <For
                        each=move || controller.with(|c| c.page_items().to_vec())
                        key=|product| product.id
                        let:product
                    >
                        <ProductCard product=product.clone() on_details=on_details/>
                    </For>
                </div>
                <div class="pagination">
                    <For
                        each=move || (1..=controller.with(|c| c.total_pages())).collect::<Vec<_>>()
                        key=|page| *page
                        let:page
                    >
                        <button
                            class:active=move || controller.with(|c| c.page() == page)
                            on:click=move |_| controller.update(|c| c.set_page(page))
                        >
                            {page}
                        </button>
                    </For>
                </div>
            }
            .into_view(),
        }}

        {move || {
            selected.get().map(|product| view! {
                <Modal on_close=close_modal>
                    <ProductDetail product=product.clone()/>
                </Modal>
            })
        }}
    }
}
