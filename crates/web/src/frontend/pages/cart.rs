//! Cart page: session cart contents with per-row removal.

use leptos::*;

use storefront_cart::CartStore;

use crate::session::WebSession;

/// Cart view; reads the session cart once at mount.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = create_rw_signal(CartStore::load(WebSession::new()));

    let remove = move |index: usize| cart.update(|c| c.remove(index));

    view! {
        <div class="cart">
            <h1>"Your Cart"</h1>
            {move || {
                cart.with(|c| {
                    if c.is_empty() {
                        view! { <p class="status">"Your cart is empty."</p> }.into_view()
                    } else {
                        c.items()
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <div class="cart-row">
                                        <img src=item.thumbnail.clone() alt=item.title.clone()/>
                                        <div>
                                            <h2>{item.title.clone()}</h2>
                                            <p>{format!("${}", item.price)}</p>
                                        </div>
                                        <button on:click=move |_| remove(index)>"Remove"</button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                })
            }}
        </div>
    }
}
