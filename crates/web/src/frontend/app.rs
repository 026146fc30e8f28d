//! Application shell and routing.

use leptos::*;
use leptos_router::*;

use crate::frontend::pages::{CartPage, HomePage};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=Shell>
                    <Route path="" view=HomePage/>
                    <Route path="cart" view=CartPage/>
                </Route>
            </Routes>
        </Router>
    }
}

/// Navigation shell shared by every route.
#[component]
fn Shell() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">"Home"</A>
            <A href="/cart">"Cart"</A>
        </nav>
        <main>
            <Outlet/>
        </main>
    }
}
