//! Container-Detail Page
//!
//! Batch selection, pending quantity edits, and per-item edit/delete
//! modals for one container.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::browser::{self, FADE_MS};
use crate::components::Modal;
use crate::context::use_page_context;
use crate::models::{Container, ContainerItem};
use crate::notify::use_notifier;
use crate::state::{selected_label, QuantityEdits, Selection};
use crate::store::{
    store_remove_items, store_set_expiration, store_set_quantity, DetailState,
    DetailStateStoreFields, DetailStore,
};

#[derive(Debug, Clone, PartialEq)]
struct EditTarget {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct DeleteTarget {
    id: u32,
    name: String,
    quantity: u32,
}

#[component]
pub fn ContainerDetailPage(container_id: u32) -> impl IntoView {
    let ctx = use_page_context();
    let notifier = use_notifier();

    let store: DetailStore = Store::new(DetailState::default());
    let edits = RwSignal::new(QuantityEdits::default());
    let selection = RwSignal::new(Selection::default());
    let containers = RwSignal::new(Vec::<Container>::new());
    let fading = RwSignal::new(HashSet::<u32>::new());

    // Edit modal
    let edit_target = RwSignal::new(Option::<EditTarget>::None);
    let edit_quantity = RwSignal::new(0u32);
    let edit_expiration = RwSignal::new(String::new());
    let editing = RwSignal::new(false);

    // Delete modal
    let delete_target = RwSignal::new(Option::<DeleteTarget>::None);
    let add_to_shopping = RwSignal::new(true);
    let deleting = RwSignal::new(false);

    // Batch bar
    let batch_destination = RwSignal::new(String::new());
    let batch_add_to_shopping = RwSignal::new(true);
    let batch_busy = RwSignal::new(false);

    // Pending-changes bar
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::container_detail(container_id).await {
                Ok(detail) => {
                    edits.set(QuantityEdits::seed(
                        detail.items.iter().map(|i| (i.id, i.quantity)),
                    ));
                    store.container().set(Some(detail.container));
                    store.items().set(detail.items);
                    store.loaded().set(true);
                }
                Err(e) => {
                    log!("failed to load container {container_id}: {e}");
                    notifier.error(format!("Failed to load this container: {e}"));
                }
            }
            match api::list_containers().await {
                Ok(all) => containers.set(
                    all.into_iter().filter(|c| c.id != container_id).collect(),
                ),
                Err(e) => {
                    log!("failed to load containers: {e}");
                    notifier.error(format!("Failed to load containers: {e}"));
                }
            }
        });
    });

    // ========================
    // Selection
    // ========================

    let toggle_item = move |item_id: u32, checked: bool| {
        selection.update(|sel| sel.toggle(item_id, checked));
    };

    let toggle_all = move |checked: bool| {
        let ids: Vec<u32> = store.items().with(|items| items.iter().map(|i| i.id).collect());
        selection.update(|sel| sel.set_all(ids, checked));
    };

    let all_checked = move || {
        selection.with(|sel| {
            store.items().with(|items| {
                !items.is_empty() && items.iter().all(|i| sel.contains(i.id))
            })
        })
    };

    // ========================
    // Quantity edits
    // ========================

    let adjust_quantity = move |item_id: u32, delta: i32| {
        let next = edits
            .try_update(|e| e.adjust(item_id, delta))
            .unwrap_or_default();
        store_set_quantity(&store, item_id, next);
    };

    let reset_quantities = move |_: web_sys::MouseEvent| {
        let restored = edits.try_update(|e| e.reset()).unwrap_or_default();
        for (item_id, quantity) in restored {
            store_set_quantity(&store, item_id, quantity);
        }
    };

    let save_quantities = move |_: web_sys::MouseEvent| {
        let changes = edits.with_untracked(|e| e.changes());
        if changes.is_empty() {
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::batch_update_quantities(changes).await {
                Ok(outcome) => {
                    edits.update(|e| e.commit());
                    notifier.success(outcome.message);
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            saving.set(false);
        });
    };

    // ========================
    // Batch move / remove
    // ========================

    let batch_move = move |_: web_sys::MouseEvent| {
        let Some(ids) = selection.with_untracked(|s| s.batch_ids()) else {
            browser::alert("Select at least one item first.");
            return;
        };
        let Ok(destination) = batch_destination.get_untracked().parse::<u32>() else {
            browser::alert("Choose a destination container first.");
            return;
        };
        batch_busy.set(true);
        spawn_local(async move {
            match api::batch_move_items(ids.clone(), destination).await {
                Ok(outcome) => {
                    if let Some(count) = outcome.shopping_count {
                        ctx.set_shopping_count(count);
                    }
                    let remaining = store_remove_items(&store, &ids);
                    edits.update(|e| {
                        for id in &ids {
                            e.remove(*id);
                        }
                    });
                    selection.update(|s| s.clear());
                    notifier.success(outcome.message);
                    if remaining == 0 {
                        browser::reload();
                    }
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            batch_busy.set(false);
        });
    };

    let batch_remove = move |_: web_sys::MouseEvent| {
        let Some(ids) = selection.with_untracked(|s| s.batch_ids()) else {
            browser::alert("Select at least one item first.");
            return;
        };
        let to_shopping = batch_add_to_shopping.get_untracked();
        batch_busy.set(true);
        spawn_local(async move {
            match api::batch_remove_items(ids.clone(), to_shopping).await {
                Ok(outcome) => {
                    if let Some(count) = outcome.shopping_count {
                        ctx.set_shopping_count(count);
                    }
                    let remaining = store_remove_items(&store, &ids);
                    edits.update(|e| {
                        for id in &ids {
                            e.remove(*id);
                        }
                    });
                    selection.update(|s| s.clear());
                    notifier.success(outcome.message);
                    if remaining == 0 {
                        browser::reload();
                    }
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            batch_busy.set(false);
        });
    };

    // ========================
    // Edit modal
    // ========================

    let open_edit_modal = move |item: ContainerItem| {
        edit_quantity.set(item.quantity);
        edit_expiration.set(item.expiration_date.clone().unwrap_or_default());
        edit_target.set(Some(EditTarget {
            id: item.id,
            name: item.food_name,
        }));
    };

    let confirm_edit = move |_: web_sys::MouseEvent| {
        let Some(target) = edit_target.get_untracked() else {
            browser::alert("No item is being edited.");
            return;
        };
        let quantity = edit_quantity.get_untracked();
        let expiration = {
            let raw = edit_expiration.get_untracked();
            if raw.is_empty() { None } else { Some(raw) }
        };
        editing.set(true);
        spawn_local(async move {
            match api::update_item(target.id, expiration.clone(), quantity).await {
                Ok(outcome) => {
                    store_set_quantity(&store, target.id, outcome.quantity);
                    store_set_expiration(
                        &store,
                        target.id,
                        expiration,
                        outcome.days_until_expiration,
                    );
                    edits.update(|e| e.set_original(target.id, outcome.quantity));
                    edit_target.set(None);
                    notifier.success(outcome.message);
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            editing.set(false);
        });
    };

    // ========================
    // Delete modal
    // ========================

    let open_delete_modal = move |item: ContainerItem| {
        add_to_shopping.set(true);
        delete_target.set(Some(DeleteTarget {
            id: item.id,
            name: item.food_name,
            quantity: item.quantity,
        }));
    };

    let confirm_delete = move |_: web_sys::MouseEvent| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let to_shopping = add_to_shopping.get_untracked();
        deleting.set(true);
        spawn_local(async move {
            match api::delete_item(target.id, to_shopping).await {
                Ok(outcome) => {
                    if let Some(count) = outcome.shopping_count {
                        ctx.set_shopping_count(count);
                    }
                    delete_target.set(None);
                    notifier.success(outcome.message);
                    fading.update(|f| {
                        f.insert(target.id);
                    });
                    TimeoutFuture::new(FADE_MS).await;
                    fading.update(|f| {
                        f.remove(&target.id);
                    });
                    let remaining = store_remove_items(&store, &[target.id]);
                    edits.update(|e| e.remove(target.id));
                    selection.update(|s| s.toggle(target.id, false));
                    if remaining == 0 {
                        browser::reload();
                    }
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            deleting.set(false);
        });
    };

    view! {
        <div class="container-page">
            <header class="container-header">
                <h1>
                    {move || {
                        store
                            .container()
                            .with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())
                    }}
                </h1>
                <p class="item-count">
                    {move || format!("{} items", store.items().with(|l| l.len()))}
                </p>
            </header>

            // Batch-operations bar, visible iff something is selected.
            <Show when=move || selection.with(|s| !s.is_empty())>
                <div class="batch-bar">
                    <span class="selected-count">
                        {move || selection.with(|s| selected_label(s.len()))}
                    </span>
                    <select
                        prop:value=move || batch_destination.get()
                        on:change=move |ev| batch_destination.set(event_target_value(&ev))
                    >
                        <option value="">"Move to…"</option>
                        <For
                            each=move || containers.get()
                            key=|c| c.id
                            children=move |c| {
                                view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                            }
                        />
                    </select>
                    <button
                        class="batch-move-btn"
                        disabled=move || batch_busy.get()
                        on:click=batch_move
                    >
                        {move || if batch_busy.get() { "Working…" } else { "Move selected" }}
                    </button>
                    <label class="batch-shopping">
                        <input
                            type="checkbox"
                            prop:checked=move || batch_add_to_shopping.get()
                            on:change=move |ev| batch_add_to_shopping.set(event_target_checked(&ev))
                        />
                        "Add removed items to shopping list"
                    </label>
                    <button
                        class="batch-remove-btn"
                        disabled=move || batch_busy.get()
                        on:click=batch_remove
                    >
                        {move || if batch_busy.get() { "Working…" } else { "Remove selected" }}
                    </button>
                    <button
                        class="clear-selection-btn"
                        on:click=move |_| selection.update(|s| s.clear())
                    >
                        "Clear selection"
                    </button>
                </div>
            </Show>

            // Pending-changes bar, visible iff unsaved quantity edits exist.
            <Show when=move || edits.with(|e| e.is_dirty())>
                <div class="pending-bar">
                    <span>
                        {move || {
                            let count = edits.with(|e| e.pending_len());
                            format!(
                                "{} unsaved quantity change{}",
                                count,
                                if count == 1 { "" } else { "s" },
                            )
                        }}
                    </span>
                    <button class="reset-btn" on:click=reset_quantities>"Reset"</button>
                    <button
                        class="save-btn"
                        disabled=move || saving.get()
                        on:click=save_quantities
                    >
                        {move || if saving.get() { "Saving…" } else { "Save changes" }}
                    </button>
                </div>
            </Show>

            <Show when=move || store.loaded().get() && store.items().with(|l| l.is_empty())>
                <p class="empty-state">"This container is empty."</p>
            </Show>

            <table class="item-table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                prop:checked=all_checked
                                on:change=move |ev| toggle_all(event_target_checked(&ev))
                            />
                        </th>
                        <th>"Food"</th>
                        <th>"Quantity"</th>
                        <th>"Expiration"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.items().get()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id;
                            let quantity = Memo::new(move |_| {
                                store.items().with(|items| {
                                    items
                                        .iter()
                                        .find(|i| i.id == id)
                                        .map(|i| i.quantity)
                                        .unwrap_or(0)
                                })
                            });
                            let status = Memo::new(move |_| {
                                store.items().with(|items| {
                                    items.iter().find(|i| i.id == id).and_then(|i| i.status())
                                })
                            });
                            let edit_item = item.clone();
                            let delete_item = item.clone();
                            let row_class = move || {
                                if fading.with(|f| f.contains(&id)) {
                                    "item-row removing"
                                } else {
                                    "item-row"
                                }
                            };
                            view! {
                                <tr class=row_class>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selection.with(|s| s.contains(id))
                                            on:change=move |ev| {
                                                toggle_item(id, event_target_checked(&ev))
                                            }
                                        />
                                    </td>
                                    <td class="item-name">{item.food_name.clone()}</td>
                                    <td class="item-qty">
                                        <button
                                            class="qty-btn"
                                            on:click=move |_| adjust_quantity(id, -1)
                                        >
                                            "−"
                                        </button>
                                        <span class="qty-value">{move || quantity.get()}</span>
                                        <button
                                            class="qty-btn"
                                            on:click=move |_| adjust_quantity(id, 1)
                                        >
                                            "+"
                                        </button>
                                    </td>
                                    <td>
                                        {move || {
                                            status.get().map(|s| view! {
                                                <span class=format!("status {}", s.css_class())>
                                                    {s.text()}
                                                </span>
                                            })
                                        }}
                                    </td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| open_edit_modal(edit_item.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| open_delete_modal(delete_item.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>

        // Edit modal
        {move || {
            edit_target.get().map(|target| {
                view! {
                    <Modal
                        title=format!("Edit {}", target.name)
                        on_close=move |_: ()| edit_target.set(None)
                    >
                        <label>
                            "Quantity"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || edit_quantity.get().to_string()
                                on:input=move |ev| {
                                    edit_quantity.set(event_target_value(&ev).parse().unwrap_or(0))
                                }
                            />
                        </label>
                        <label>
                            "Expiration date"
                            <input
                                type="date"
                                prop:value=move || edit_expiration.get()
                                on:input=move |ev| edit_expiration.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="confirm-btn"
                            disabled=move || editing.get()
                            on:click=confirm_edit
                        >
                            {move || if editing.get() { "Saving…" } else { "Save" }}
                        </button>
                    </Modal>
                }
            })
        }}

        // Delete modal
        {move || {
            delete_target.get().map(|target| {
                view! {
                    <Modal
                        title="Delete item"
                        on_close=move |_: ()| delete_target.set(None)
                    >
                        <p class="delete-summary">
                            {format!("Remove {} (× {})?", target.name, target.quantity)}
                        </p>
                        <label class="delete-shopping">
                            <input
                                type="checkbox"
                                prop:checked=move || add_to_shopping.get()
                                on:change=move |ev| add_to_shopping.set(event_target_checked(&ev))
                            />
                            "Also add to shopping list"
                        </label>
                        <button
                            class="confirm-btn danger"
                            disabled=move || deleting.get()
                            on:click=confirm_delete
                        >
                            {move || if deleting.get() { "Deleting…" } else { "Delete" }}
                        </button>
                    </Modal>
                }
            })
        }}
    }
}
