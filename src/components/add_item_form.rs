//! Add Item Form Component
//!
//! Modal form for cataloguing a new item. New items always start as Keep.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use unicode_segmentation::UnicodeSegmentation;

use crate::api::{self, parse_date_input, NewItem};
use crate::context::use_app_context;
use crate::models::ItemType;

/// Keep only the first grapheme typed into the emoji field
pub fn first_glyph(input: &str) -> String {
    input.graphemes(true).next().map(String::from).unwrap_or_default()
}

/// Submission needs a name and an emoji, and nothing already in flight
pub fn can_submit(name: &str, emoji: &str, submitting: bool) -> bool {
    !submitting && !name.trim().is_empty() && !emoji.is_empty()
}

/// Form for creating new items
#[component]
pub fn AddItemForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (emoji, set_emoji) = signal(String::new());
    let (item_type, set_item_type) = signal(ItemType::default());
    let (received, set_received) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit_disabled = move || !can_submit(&name.get(), &emoji.get(), submitting.get());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_submit(&name.get_untracked(), &emoji.get_untracked(), submitting.get_untracked()) {
            return;
        }
        set_submitting.set(true);

        let new_item = NewItem::new(
            &name.get_untracked(),
            &emoji.get_untracked(),
            item_type.get_untracked(),
            parse_date_input(&received.get_untracked()),
        );
        spawn_local(async move {
            let result = api::create_item(&new_item).await;
            set_submitting.set(false);
            match result {
                Ok(item) => {
                    log!("[ADD] Created item {}", item.id);
                    ctx.reload();
                    // the list view may have unmounted while the request was in flight
                    on_close.try_run(());
                }
                Err(e) => error!("[ADD] {}", e),
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Add New Item"</h2>
                <form class="add-item-form" on:submit=create_item>
                    <label>
                        "Item Name"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Item Emoji"
                        <input
                            type="text"
                            required
                            prop:value=move || emoji.get()
                            on:input=move |ev| set_emoji.set(first_glyph(&event_target_value(&ev)))
                        />
                    </label>

                    <label>
                        "Item Type"
                        <select on:change=move |ev| set_item_type.set(ItemType::from_str(&event_target_value(&ev)))>
                            {ItemType::ALL.into_iter().map(|t| view! {
                                <option value=t.as_str() selected=move || item_type.get() == t>
                                    {t.as_str()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label>
                        "Received (optional)"
                        <input
                            type="date"
                            prop:value=move || received.get()
                            on:input=move |ev| set_received.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="form-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=submit_disabled>
                            {move || if submitting.get() { "Adding..." } else { "Add Item" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
