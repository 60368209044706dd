//! Top Navigation
//!
//! Links to the server-rendered pages plus the live shopping-count badge.

use leptos::prelude::*;

use crate::context::use_page_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_page_context();
    view! {
        <header class="top-nav">
            <a class="brand" href="/">"FridgeBuddy"</a>
            <nav>
                <a href="/my-lists/">"My Lists"</a>
                <a href="/food-catalog/">"Food Catalog"</a>
                <a href="/my-lists/shopping/" class="shopping-link">
                    "Shopping List"
                    <Show when=move || ctx.shopping_count.get().is_some()>
                        <span class="shopping-badge">
                            {move || ctx.shopping_count.get().unwrap_or(0)}
                        </span>
                    </Show>
                </a>
            </nav>
        </header>
    }
}
