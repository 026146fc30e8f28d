//! Detail overlay rendered into the `#modal` mount point.

use leptos::*;

/// Overlay dismissed by a backdrop click or the close button; clicks
/// inside the panel do not dismiss. Renders through a portal into the
/// pre-existing `#modal` element (falls back to `<body>` if it is
/// missing).
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let mount = document().get_element_by_id("modal");

    view! {
        <Portal mount=mount>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="modal-panel" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| on_close.call(())>
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Portal>
    }
}
