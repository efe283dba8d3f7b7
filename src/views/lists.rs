//! Status List Views
//!
//! Keep, Give and Donated pages share one list view parameterized by the
//! status they show. Each mounts its own `ViewStore`.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, ItemUpdate};
use crate::components::{AddItemForm, CheckupBanner, CheckupManager, FilterBar, ItemCard};
use crate::context::use_app_context;
use crate::models::{CheckupType, Item, ItemStatus, ItemType};
use crate::store::{
    store_apply_status_change, store_remove_item, store_set_items, store_update_item,
    store_visible_items, ViewState, ViewStateStoreFields,
};

/// Cards are keyed by id alone; field changes flow through the card's item signal
fn list_key(item: &Item) -> String {
    item.id.clone()
}

#[component]
fn StatusListView(
    status: ItemStatus,
    title: &'static str,
    empty_message: &'static str,
    /// Category reviewed by the checkup manager and banner
    #[prop(optional)]
    checkup: Option<CheckupType>,
    #[prop(optional)] allow_add: bool,
    /// Hides status and edit actions
    #[prop(optional)]
    read_only: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ViewState::new());

    let (show_add_form, set_show_add_form) = signal(false);
    let (show_checkup_manager, set_show_checkup_manager) = signal(false);

    spawn_local(api::prime_csrf_token());

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log!("[LIST] Loading {} items, trigger={}", status.as_str(), trigger);
        spawn_local(async move {
            match api::fetch_items_by_status(status).await {
                Ok(items) => {
                    log!("[LIST] Loaded {} {} items", items.len(), status.as_str());
                    store_set_items(&store, items);
                }
                Err(e) => {
                    error!("[LIST] {}", e);
                    store_set_items(&store, Vec::new());
                }
            }
        });
    });

    let visible = Memo::new(move |_| store_visible_items(&store));
    let loading = move || store.loading().get();

    let on_status_change = Callback::new(move |(id, new_status): (String, ItemStatus)| {
        spawn_local(async move {
            match api::update_item(&id, &ItemUpdate::status(new_status)).await {
                Ok(updated) => store_apply_status_change(&store, status, updated),
                Err(e) => error!("[LIST] Error updating item status: {}", e),
            }
        });
    });

    let on_edit = Callback::new(move |(id, update): (String, ItemUpdate)| {
        spawn_local(async move {
            match api::update_item(&id, &update).await {
                Ok(updated) => store_update_item(&store, updated),
                Err(e) => error!("[LIST] Error updating item: {}", e),
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::delete_item(&id).await {
                Ok(()) => store_remove_item(&store, &id),
                Err(e) => error!("[LIST] Error deleting item: {}", e),
            }
        });
    });

    let on_filter_change = move |filter: Option<ItemType>| store.type_filter().set(filter);

    view! {
        <div class="page list-view">
            <div class="list-header">
                <h1>{title}</h1>
                <div class="list-actions">
                    {checkup.map(|_| view! {
                        <button
                            class="icon-btn"
                            title="Checkup"
                            on:click=move |_| set_show_checkup_manager.set(true)
                        >
                            "📅"
                        </button>
                    })}
                    {allow_add.then(|| view! {
                        <button
                            class="icon-btn"
                            title="Add item"
                            on:click=move |_| set_show_add_form.set(true)
                        >
                            "+"
                        </button>
                    })}
                </div>
            </div>

            {checkup.map(|kind| view! {
                <CheckupBanner
                    checkup_type=kind
                    on_review=move |_| set_show_checkup_manager.set(true)
                />
            })}

            <FilterBar
                selected=Signal::derive(move || store.type_filter().get())
                on_filter_change=on_filter_change
            />

            <Show when=loading>
                <div class="spinner"></div>
            </Show>

            <Show when=move || !loading() && visible.with(Vec::is_empty)>
                <p class="empty-state">{empty_message}</p>
            </Show>

            <Show when=move || !loading() && !visible.with(Vec::is_empty)>
                <div class="item-list">
                    <For
                        each=move || visible.get()
                        key=list_key
                        children=move |item| {
                            // Follow the store entry so edits re-render in place
                            let id = item.id.clone();
                            let live = Memo::new(move |_| {
                                visible
                                    .with(|items| items.iter().find(|i| i.id == id).cloned())
                                    .unwrap_or_else(|| item.clone())
                            });
                            if read_only {
                                view! { <ItemCard item=live on_delete=Some(on_delete) /> }.into_any()
                            } else {
                                view! {
                                    <ItemCard
                                        item=live
                                        on_status_change=Some(on_status_change)
                                        on_edit=Some(on_edit)
                                        on_delete=Some(on_delete)
                                    />
                                }
                                .into_any()
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=move || show_add_form.get()>
                <AddItemForm on_close=move |_| set_show_add_form.set(false) />
            </Show>

            {checkup.map(|kind| view! {
                <Show when=move || show_checkup_manager.get()>
                    <CheckupManager
                        checkup_type=kind
                        on_close=move |_| set_show_checkup_manager.set(false)
                    />
                </Show>
            })}
        </div>
    }
}

#[component]
pub fn KeepView() -> impl IntoView {
    view! {
        <StatusListView
            status=ItemStatus::Keep
            title="Items to Keep"
            empty_message="No items to keep at the moment."
            checkup=CheckupType::Keep
            allow_add=true
        />
    }
}

#[component]
pub fn GiveView() -> impl IntoView {
    view! {
        <StatusListView
            status=ItemStatus::Give
            title="Items to Give Away"
            empty_message="No items to give away at the moment."
            checkup=CheckupType::Give
        />
    }
}

#[component]
pub fn DonatedView() -> impl IntoView {
    view! {
        <StatusListView
            status=ItemStatus::Donate
            title="Donated Items"
            empty_message="No donated items at the moment."
            read_only=true
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jacket() -> Item {
        Item {
            id: "1".to_string(),
            name: "Jacket".to_string(),
            picture_url: "🧥".to_string(),
            item_type: ItemType::Clothing,
            status: ItemStatus::Keep,
            ownership_duration: None,
            last_used_duration: None,
            item_received_date: None,
            last_used: None,
        }
    }

    #[test]
    fn test_list_key_survives_edits() {
        let before = jacket();
        let mut after = jacket();
        after.name = "Rain jacket".to_string();
        after.last_used = Some("2024-05-05T00:00:00.000Z".to_string());
        assert_eq!(list_key(&before), list_key(&after));

        let mut other = jacket();
        other.id = "2".to_string();
        assert_ne!(list_key(&before), list_key(&other));
    }
}
