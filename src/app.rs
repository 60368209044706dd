//! FridgeBuddy Frontend App
//!
//! Mounts the page controller matching the current server route and
//! provides the shared context (nav badge, notifications).

use leptos::prelude::*;

use crate::browser;
use crate::components::NavBar;
use crate::context::PageContext;
use crate::notify::{NotificationArea, Notifier};
use crate::pages::{CatalogPage, ContainerDetailPage, ShoppingListPage};

/// Server-rendered routes this client attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    ShoppingList,
    ContainerDetail(u32),
    Catalog,
    Unknown,
}

impl Route {
    fn current() -> Self {
        Self::parse(&browser::pathname())
    }

    fn parse(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed == "food-catalog" {
            return Route::Catalog;
        }
        if let Some(rest) = trimmed.strip_prefix("my-lists/") {
            if rest == "shopping" {
                return Route::ShoppingList;
            }
            if let Ok(id) = rest.parse::<u32>() {
                return Route::ContainerDetail(id);
            }
        }
        Route::Unknown
    }
}

#[component]
pub fn App() -> impl IntoView {
    let shopping_count = signal::<Option<u32>>(None);
    provide_context(PageContext::new(shopping_count));
    provide_context(Notifier::new());

    let route = Route::current();

    view! {
        <NavBar />
        <main class="page">
            {match route {
                Route::ShoppingList => view! { <ShoppingListPage /> }.into_any(),
                Route::ContainerDetail(id) => {
                    view! { <ContainerDetailPage container_id=id /> }.into_any()
                }
                Route::Catalog => view! { <CatalogPage /> }.into_any(),
                Route::Unknown => {
                    view! { <p class="empty-state">"Nothing to show here."</p> }.into_any()
                }
            }}
        </main>
        <NotificationArea />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_routes() {
        assert_eq!(Route::parse("/my-lists/shopping/"), Route::ShoppingList);
        assert_eq!(Route::parse("/my-lists/12/"), Route::ContainerDetail(12));
        assert_eq!(Route::parse("/food-catalog/"), Route::Catalog);
        assert_eq!(Route::parse("/about/"), Route::Unknown);
        assert_eq!(Route::parse("/my-lists/not-a-number/"), Route::Unknown);
    }
}
