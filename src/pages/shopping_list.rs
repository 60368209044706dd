//! Shopping-List Page
//!
//! Moves items from the shopping list into a chosen container, with an
//! inline preview of that container's contents.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::browser::{self, FADE_MS};
use crate::components::Modal;
use crate::context::use_page_context;
use crate::models::{Container, ContainerItem};
use crate::notify::use_notifier;

/// The item targeted by the open move modal.
#[derive(Debug, Clone, PartialEq)]
struct MoveTarget {
    id: u32,
    name: String,
    quantity: u32,
}

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let ctx = use_page_context();
    let notifier = use_notifier();

    let items = RwSignal::new(Vec::<ContainerItem>::new());
    let containers = RwSignal::new(Vec::<Container>::new());
    let selected = RwSignal::new(Option::<Container>::None);
    // None until a container is picked; Some(empty) is a real empty container.
    let preview = RwSignal::new(Option::<Vec<ContainerItem>>::None);
    let move_target = RwSignal::new(Option::<MoveTarget>::None);
    let expiration_input = RwSignal::new(String::new());
    let moving = RwSignal::new(false);
    let fading = RwSignal::new(HashSet::<u32>::new());

    // Initial load: the shopping list and the destination containers.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_containers().await {
                Ok(loaded) => {
                    let shopping_id = loaded
                        .iter()
                        .find(|c| c.container_type.is_shopping())
                        .map(|c| c.id);
                    containers.set(
                        loaded
                            .into_iter()
                            .filter(|c| !c.container_type.is_shopping())
                            .collect(),
                    );
                    if let Some(shopping_id) = shopping_id {
                        match api::container_detail(shopping_id).await {
                            Ok(detail) => {
                                ctx.set_shopping_count(detail.items.len() as u32);
                                items.set(detail.items);
                            }
                            Err(e) => {
                                log!("failed to load shopping list: {e}");
                                notifier.error(format!("Failed to load shopping list: {e}"));
                            }
                        }
                    }
                }
                Err(e) => {
                    log!("failed to load containers: {e}");
                    notifier.error(format!("Failed to load containers: {e}"));
                }
            }
        });
    });

    let select_container = move |value: String| {
        if value.is_empty() {
            selected.set(None);
            preview.set(None);
            return;
        }
        let Ok(container_id) = value.parse::<u32>() else {
            return;
        };
        let container =
            containers.with(|list| list.iter().find(|c| c.id == container_id).cloned());
        let Some(container) = container else { return };
        selected.set(Some(container));
        spawn_local(async move {
            let fetched = api::container_detail(container_id).await.map(|d| d.items);
            if let Err(e) = &fetched {
                log!("preview fetch failed: {e}");
                notifier.error(format!("Failed to load container contents: {e}"));
            }
            preview.set(preview_after_fetch(preview.get_untracked(), fetched));
        });
    };

    let open_move_modal = move |item: ContainerItem| {
        if selected.get_untracked().is_none() {
            browser::alert("Select a destination container first.");
            return;
        }
        expiration_input.set(String::new());
        move_target.set(Some(MoveTarget {
            id: item.id,
            name: item.food_name,
            quantity: item.quantity,
        }));
    };

    let confirm_move = move |_: web_sys::MouseEvent| {
        let Some(target) = move_target.get_untracked() else {
            browser::alert("No item selected to move.");
            return;
        };
        let Some(container) = selected.get_untracked() else {
            browser::alert("Select a destination container first.");
            return;
        };
        let expiration = {
            let raw = expiration_input.get_untracked();
            if raw.is_empty() { None } else { Some(raw) }
        };
        moving.set(true);
        spawn_local(async move {
            match api::move_item(target.id, container.id, target.quantity, expiration).await {
                Ok(outcome) => {
                    ctx.set_shopping_count(outcome.shopping_count);
                    move_target.set(None);
                    notifier.success(outcome.message);
                    fading.update(|set| {
                        set.insert(target.id);
                    });
                    TimeoutFuture::new(FADE_MS).await;
                    fading.update(|set| {
                        set.remove(&target.id);
                    });
                    let remaining = items
                        .try_update(|list| {
                            list.retain(|i| i.id != target.id);
                            list.len()
                        })
                        .unwrap_or(0);
                    if remaining == 0 {
                        browser::reload();
                    } else if let Ok(detail) = api::container_detail(container.id).await {
                        preview.set(Some(detail.items));
                    }
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            moving.set(false);
        });
    };

    view! {
        <div class="shopping-page">
            <section class="shopping-list">
                <h1>"Shopping List"</h1>
                <p class="item-count">
                    {move || format!("{} items", items.with(|l| l.len()))}
                </p>

                <label class="destination-picker">
                    "Move items to: "
                    <select on:change=move |ev| select_container(event_target_value(&ev))>
                        <option value="">"Choose a container…"</option>
                        <For
                            each=move || containers.get()
                            key=|c| c.id
                            children=move |c| {
                                view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                            }
                        />
                    </select>
                </label>

                <Show when=move || items.with(|l| l.is_empty())>
                    <p class="empty-state">"Your shopping list is empty."</p>
                </Show>

                <ul class="item-list">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let status = item.status();
                            let row_item = item.clone();
                            let row_class = move || {
                                if fading.with(|f| f.contains(&id)) {
                                    "item-row removing"
                                } else {
                                    "item-row"
                                }
                            };
                            view! {
                                <li class=row_class>
                                    <span class="item-name">{item.food_name.clone()}</span>
                                    <span class="item-qty">{format!("× {}", item.quantity)}</span>
                                    {status.map(|s| view! {
                                        <span class=format!("status {}", s.css_class())>
                                            {s.text()}
                                        </span>
                                    })}
                                    <button
                                        class="move-btn"
                                        on:click=move |_| open_move_modal(row_item.clone())
                                    >
                                        "Move"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <aside class="preview-pane">
                <h3>
                    {move || {
                        selected.with(|s| {
                            s.as_ref()
                                .map(|c| format!("Inside {}", c.name))
                                .unwrap_or_else(|| "Container preview".to_string())
                        })
                    }}
                </h3>
                {move || match preview.get() {
                    None => view! {
                        <p class="empty-state">"Pick a container to preview its contents."</p>
                    }
                    .into_any(),
                    Some(list) if list.is_empty() => view! {
                        <p class="empty-state">"This container is empty."</p>
                    }
                    .into_any(),
                    Some(list) => view! {
                        <ul class="preview-list">
                            {list
                                .into_iter()
                                .map(|item| {
                                    let status = item.status();
                                    view! {
                                        <li>
                                            <span>{item.food_name}</span>
                                            <span>{format!("× {}", item.quantity)}</span>
                                            {status.map(|s| view! {
                                                <span class=format!("status {}", s.css_class())>
                                                    {s.text()}
                                                </span>
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </aside>
        </div>

        {move || {
            move_target.get().map(|target| {
                let hint = selected
                    .get()
                    .and_then(|c| c.container_type.expiration_hint());
                let destination = selected
                    .get()
                    .map(|c| c.name)
                    .unwrap_or_default();
                view! {
                    <Modal
                        title="Move item"
                        on_close=move |_: ()| move_target.set(None)
                    >
                        <p class="move-summary">
                            {format!("{} (× {}) → {}", target.name, target.quantity, destination)}
                        </p>
                        {hint.map(|text| view! { <p class="expiration-hint">{text}</p> })}
                        <label>
                            "Expiration date (optional)"
                            <input
                                type="date"
                                prop:value=move || expiration_input.get()
                                on:input=move |ev| expiration_input.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="confirm-btn"
                            disabled=move || moving.get()
                            on:click=confirm_move
                        >
                            {move || if moving.get() { "Moving…" } else { "Move item" }}
                        </button>
                    </Modal>
                }
            })
        }}
    }
}

/// A failed fetch never masquerades as an empty container: the pane keeps
/// whatever it last showed and the error is surfaced separately.
fn preview_after_fetch(
    current: Option<Vec<ContainerItem>>,
    fetched: Result<Vec<ContainerItem>, ApiError>,
) -> Option<Vec<ContainerItem>> {
    match fetched {
        Ok(items) => Some(items),
        Err(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> ContainerItem {
        ContainerItem {
            id,
            food_name: name.to_string(),
            quantity: 1,
            expiration_date: None,
            days_until_expiration: None,
        }
    }

    #[test]
    fn failed_preview_fetch_keeps_the_pane_untouched() {
        let failed: Result<Vec<ContainerItem>, ApiError> = Err(ApiError::Status(502));
        assert_eq!(preview_after_fetch(None, failed), None);

        let shown = Some(vec![item(1, "Apples")]);
        let failed = Err(ApiError::Network("connection reset".to_string()));
        assert_eq!(preview_after_fetch(shown.clone(), failed), shown);
    }

    #[test]
    fn successful_preview_fetch_replaces_the_pane() {
        let items = vec![item(2, "Milk"), item(3, "Eggs")];
        assert_eq!(preview_after_fetch(None, Ok(items.clone())), Some(items));
        // an empty success is a genuinely empty container
        assert_eq!(preview_after_fetch(None, Ok(Vec::new())), Some(Vec::new()));
    }
}
