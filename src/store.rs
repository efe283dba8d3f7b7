//! Per-View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each list view owns
//! one store; entries are keyed by item id and the server's copy of an item
//! always replaces the local one.
//!
//! Responses may land after the owning view has unmounted, so the store
//! helpers only use the `try_*`/`set` paths, which are no-ops on a disposed store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, ItemStatus, ItemType};

/// State of one status list view
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Items in backend order
    pub items: Vec<Item>,
    /// True until the first fetch settles
    pub loading: bool,
    /// Client-side type filter (None = all)
    pub type_filter: Option<ItemType>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// List Operations
// ========================

/// Replace the entry with the same id, keeping its position
pub fn merge_item(items: &mut [Item], updated: Item) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(item) => {
            *item = updated;
            true
        }
        None => false,
    }
}

/// Remove an item by id
pub fn remove_item(items: &mut Vec<Item>, item_id: &str) {
    items.retain(|item| item.id != item_id);
}

/// Apply the server's answer to a status change made from a view showing `view_status`
pub fn apply_status_change(items: &mut Vec<Item>, view_status: ItemStatus, updated: Item) {
    if updated.status == view_status {
        merge_item(items, updated);
    } else {
        remove_item(items, &updated.id);
    }
}

/// Exact-match type filter; `None` keeps everything
pub fn filter_by_type(items: &[Item], item_type: Option<ItemType>) -> Vec<Item> {
    match item_type {
        Some(t) => items.iter().filter(|item| item.item_type == t).cloned().collect(),
        None => items.to_vec(),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list after a fetch
pub fn store_set_items(store: &ViewStore, items: Vec<Item>) {
    store.items().set(items);
    store.loading().set(false);
}

/// Update an item in the store by ID
pub fn store_update_item(store: &ViewStore, updated_item: Item) {
    store.items().try_update(|items| merge_item(items, updated_item));
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &ViewStore, item_id: &str) {
    store.items().try_update(|items| remove_item(items, item_id));
}

/// Reconcile a status change made from the view showing `view_status`
pub fn store_apply_status_change(store: &ViewStore, view_status: ItemStatus, updated_item: Item) {
    store
        .items()
        .try_update(|items| apply_status_change(items, view_status, updated_item));
}

/// Items passing the current type filter
pub fn store_visible_items(store: &ViewStore) -> Vec<Item> {
    let filter = store.type_filter().get();
    filter_by_type(&store.items().read(), filter)
}
