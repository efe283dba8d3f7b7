//! Item Edit Form Component
//!
//! Inline editor for an item's name and dates.

use leptos::prelude::*;

use crate::api::{parse_date_input, ItemUpdate};
use crate::models::Item;

/// Update carrying only the fields the user actually changed
pub fn edit_update(item: &Item, name: &str, received: &str, last_used: &str) -> Option<ItemUpdate> {
    let name = name.trim();
    let update = ItemUpdate {
        name: (!name.is_empty() && name != item.name).then(|| name.to_string()),
        ownership_date: parse_date_input(received)
            .filter(|_| received.trim() != item.received_date_input()),
        last_used_date: parse_date_input(last_used)
            .filter(|_| last_used.trim() != item.last_used_input()),
        status: None,
    };
    (update != ItemUpdate::default()).then_some(update)
}

#[component]
pub fn ItemEditForm(
    item: Item,
    #[prop(into)] on_save: Callback<ItemUpdate>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(item.name.clone());
    let (received, set_received) = signal(item.received_date_input());
    let (last_used, set_last_used) = signal(item.last_used_input());
    let original = StoredValue::new(item);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = original.with_value(|item| {
            edit_update(item, &name.get(), &received.get(), &last_used.get())
        });
        match update {
            Some(update) => on_save.run(update),
            None => on_cancel.run(()),
        }
    };

    view! {
        <form class="item-edit-form" on:submit=save on:click=|ev| ev.stop_propagation()>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Received"
                <input
                    type="date"
                    prop:value=move || received.get()
                    on:input=move |ev| set_received.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Last used"
                <input
                    type="date"
                    prop:value=move || last_used.get()
                    on:input=move |ev| set_last_used.set(event_target_value(&ev))
                />
            </label>
            <div class="form-actions">
                <button type="button" class="secondary-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
