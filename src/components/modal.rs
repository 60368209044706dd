//! Modal Shell Component
//!
//! Backdrop, title bar with close button, and a body slot. The pages own
//! their modal state; this only renders it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="modal" role="dialog">
            <div class="modal-header">
                <h3>{title}</h3>
                <button
                    class="modal-close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
            <div class="modal-body">{children()}</div>
        </div>
    }
}
