//! Container-Detail Page Store
//!
//! Uses Leptos reactive_stores for fine-grained item updates.

use leptos::prelude::Write;
use reactive_stores::Store;

use crate::models::{Container, ContainerItem};

/// State of the container-detail page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DetailState {
    /// The container being viewed
    pub container: Option<Container>,
    /// Its items, in server order
    pub items: Vec<ContainerItem>,
    /// Whether the initial fetch finished
    pub loaded: bool,
}

/// Type alias for the store
pub type DetailStore = Store<DetailState>;

// ========================
// Store Helper Functions
// ========================

/// Set an item's displayed quantity by ID
pub fn store_set_quantity(store: &DetailStore, item_id: u32, quantity: u32) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| item.quantity = quantity);
}

/// Record a server-confirmed expiration change by ID
pub fn store_set_expiration(
    store: &DetailStore,
    item_id: u32,
    expiration_date: Option<String>,
    days_until_expiration: Option<i32>,
) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| {
            item.expiration_date = expiration_date;
            item.days_until_expiration = days_until_expiration;
        });
}

/// Remove items from the store by ID, returning how many remain
pub fn store_remove_items(store: &DetailStore, ids: &[u32]) -> usize {
    retain_without(&mut store.items().write(), ids)
}

/// Drop the given ids from the list and report how many items remain.
/// Zero remaining is the signal to reload the page.
fn retain_without(items: &mut Vec<ContainerItem>, ids: &[u32]) -> usize {
    items.retain(|item| !ids.contains(&item.id));
    items.len()
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
    fn removing_one_of_several_keeps_the_rest() {
        let mut items = vec![item(1, "Milk"), item(2, "Eggs"), item(3, "Butter")];
        let remaining = retain_without(&mut items, &[2]);
        assert_eq!(remaining, 2);
        assert!(items.iter().all(|i| i.id != 2));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn removing_the_last_item_reports_empty() {
        let mut items = vec![item(7, "Cheese")];
        assert_eq!(retain_without(&mut items, &[7]), 0);

        let mut items = vec![item(1, "Milk"), item(2, "Eggs")];
        assert_eq!(retain_without(&mut items, &[1, 2]), 0);
    }

    #[test]
    fn unknown_ids_remove_nothing() {
        let mut items = vec![item(1, "Milk")];
        assert_eq!(retain_without(&mut items, &[99]), 1);
    }
}
