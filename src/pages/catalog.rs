//! Catalog Page
//!
//! Collapsible category sections with per-item "add to container" controls
//! and a batch add into the shopping list.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::models::{CatalogCategory, CatalogFood, Container};
use crate::notify::use_notifier;
use crate::state::{selected_label, Selection};

/// Delay before the page reloads to refresh server-rendered counters.
const RELOAD_DELAY_MS: u32 = 1200;
/// How long a per-item add button shows its outcome before restoring.
const RESTORE_DELAY_MS: u32 = 2000;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let notifier = use_notifier();

    let categories = RwSignal::new(Vec::<CatalogCategory>::new());
    let containers = RwSignal::new(Vec::<Container>::new());
    let expanded = RwSignal::new(HashSet::<String>::new());
    let checked = RwSignal::new(Selection::default());
    let batch_busy = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::catalog().await {
                Ok(loaded) => categories.set(loaded),
                Err(e) => {
                    log!("failed to load catalog: {e}");
                    notifier.error(format!("Failed to load the catalog: {e}"));
                }
            }
            match api::list_containers().await {
                Ok(loaded) => containers.set(loaded),
                Err(e) => {
                    log!("failed to load containers: {e}");
                    notifier.error(format!("Failed to load containers: {e}"));
                }
            }
        });
    });

    let batch_add = move |_: web_sys::MouseEvent| {
        let Some(ids) = checked.with_untracked(|s| s.batch_ids()) else {
            browser::alert("Select at least one food first.");
            return;
        };
        batch_busy.set(true);
        spawn_local(async move {
            match api::batch_add_to_shopping(ids).await {
                Ok(outcome) => {
                    notifier.success(outcome.message);
                    checked.update(|s| s.clear());
                    // Shopping counters elsewhere on the page are
                    // server-rendered; a reload refreshes them.
                    TimeoutFuture::new(RELOAD_DELAY_MS).await;
                    browser::reload();
                }
                Err(e) => notifier.error(e.to_string()),
            }
            batch_busy.set(false);
        });
    };

    view! {
        <div class="catalog-page">
            <header class="catalog-header">
                <h1>"Food Catalog"</h1>
                <div class="catalog-batch">
                    <span class="selected-count">
                        {move || checked.with(|s| selected_label(s.len()))}
                    </span>
                    <button
                        class="batch-add-btn"
                        disabled=move || batch_busy.get()
                        on:click=batch_add
                    >
                        {move || {
                            if batch_busy.get() { "Adding…" } else { "Add selected to shopping list" }
                        }}
                    </button>
                </div>
            </header>

            <For
                each=move || categories.get()
                key=|category| category.key.clone()
                children=move |category| {
                    view! {
                        <CategorySection
                            category=category
                            expanded=expanded
                            containers=containers
                            checked=checked
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn CategorySection(
    category: CatalogCategory,
    expanded: RwSignal<HashSet<String>>,
    containers: RwSignal<Vec<Container>>,
    checked: RwSignal<Selection>,
) -> impl IntoView {
    let food_count = category.foods.len();
    let key = category.key.clone();
    let is_open = {
        let key = key.clone();
        Memo::new(move |_| expanded.with(|e| e.contains(&key)))
    };
    let toggle = move |_: web_sys::MouseEvent| {
        let key = key.clone();
        expanded.update(|e| {
            if !e.remove(&key) {
                e.insert(key);
            }
        });
    };

    view! {
        <section class="catalog-category">
            <header class="category-header" on:click=toggle>
                <span class="category-arrow">
                    {move || if is_open.get() { "▾" } else { "▸" }}
                </span>
                <h2>{category.label.clone()}</h2>
                <span class="category-count">{format!("{food_count} foods")}</span>
            </header>
            // The 300ms expand/collapse lives in the stylesheet; the class
            // is the switch.
            <div class=move || {
                if is_open.get() { "category-body open" } else { "category-body" }
            }>
                {category
                    .foods
                    .iter()
                    .map(|food| {
                        view! {
                            <CatalogFoodRow
                                food=food.clone()
                                containers=containers
                                checked=checked
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddButtonState {
    Idle,
    Added,
    Failed,
}

#[component]
fn CatalogFoodRow(
    food: CatalogFood,
    containers: RwSignal<Vec<Container>>,
    checked: RwSignal<Selection>,
) -> impl IntoView {
    let notifier = use_notifier();

    let chosen = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let button_state = RwSignal::new(AddButtonState::Idle);

    let food_id = food.id;
    let food_name = food.name.clone();

    let add = move |_: web_sys::MouseEvent| {
        let Ok(container_id) = chosen.get_untracked().parse::<u32>() else {
            browser::alert("Choose a container first.");
            return;
        };
        let destination =
            containers.with_untracked(|list| list.iter().find(|c| c.id == container_id).cloned());
        let Some(destination) = destination else {
            browser::alert("Choose a container first.");
            return;
        };
        let food_name = food_name.clone();
        busy.set(true);
        spawn_local(async move {
            match api::add_to_container(food_id, container_id, 1).await {
                Ok(outcome) => {
                    button_state.set(AddButtonState::Added);
                    if outcome.created {
                        notifier.success(outcome.message);
                    } else {
                        notifier.success(format!(
                            "{} now at × {} in {}",
                            food_name, outcome.new_quantity, destination.name,
                        ));
                    }
                    // The badge count is server-rendered knowledge; the
                    // reload below refreshes it when the destination is the
                    // shopping list.
                    if destination.container_type.is_shopping() {
                        TimeoutFuture::new(RELOAD_DELAY_MS).await;
                        browser::reload();
                    }
                }
                Err(e) => {
                    button_state.set(AddButtonState::Failed);
                    notifier.error(e.to_string());
                }
            }
            busy.set(false);
            TimeoutFuture::new(RESTORE_DELAY_MS).await;
            let _ = button_state.try_update(|s| *s = AddButtonState::Idle);
        });
    };

    let button_label = move || {
        if busy.get() {
            return "Adding…";
        }
        match button_state.get() {
            AddButtonState::Idle => "Add",
            AddButtonState::Added => "✓ Added",
            AddButtonState::Failed => "Failed",
        }
    };

    let button_class = move || match button_state.get() {
        AddButtonState::Idle => "add-btn",
        AddButtonState::Added => "add-btn success",
        AddButtonState::Failed => "add-btn error",
    };

    view! {
        <div class="catalog-food">
            <label class="food-pick">
                <input
                    type="checkbox"
                    prop:checked=move || checked.with(|s| s.contains(food_id))
                    on:change=move |ev| {
                        checked.update(|s| s.toggle(food_id, event_target_checked(&ev)))
                    }
                />
                <span class="food-name">{food.name.clone()}</span>
            </label>
            <span class="food-description">{food.description.clone()}</span>
            <select
                prop:value=move || chosen.get()
                on:change=move |ev| chosen.set(event_target_value(&ev))
            >
                <option value="">"Add to…"</option>
                <For
                    each=move || containers.get()
                    key=|c| c.id
                    children=move |c| {
                        view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                    }
                />
            </select>
            <button class=button_class disabled=move || busy.get() on:click=add>
                {button_label}
            </button>
        </div>
    }
}
