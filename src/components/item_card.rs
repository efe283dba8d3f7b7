//! Item Card Component
//!
//! Expandable card showing one item, with optional status, edit and delete actions.

use leptos::prelude::*;

use crate::api::ItemUpdate;
use crate::components::{DeleteConfirmButton, ItemEditForm};
use crate::models::{Item, ItemStatus};

fn status_button_class(status: ItemStatus, current: ItemStatus) -> &'static str {
    if status != current {
        return "status-btn";
    }
    match status {
        ItemStatus::Keep => "status-btn active keep",
        ItemStatus::Give => "status-btn active give",
        ItemStatus::Donate => "status-btn active donate",
    }
}

/// A single item card
#[component]
pub fn ItemCard(
    #[prop(into)] item: Signal<Item>,
    #[prop(optional_no_strip)] on_status_change: Option<Callback<(String, ItemStatus)>>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<(String, ItemUpdate)>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let (editing, set_editing) = signal(false);

    let id = move || item.with_untracked(|item| item.id.clone());

    view! {
        <div class="item-card" on:click=move |_| set_expanded.update(|v| *v = !*v)>
            <div class="item-card-header">
                <div class="item-card-title">
                    <span class="item-emoji">{move || item.with(|item| item.picture_url.clone())}</span>
                    <div>
                        <h3 class="item-name">{move || item.with(|item| item.name.clone())}</h3>
                        <p class="item-type">{move || item.with(|item| item.item_type.as_str())}</p>
                    </div>
                </div>
                <button
                    class="expand-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_expanded.update(|v| *v = !*v);
                    }
                >
                    {move || if expanded.get() { "▲" } else { "▼" }}
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="item-card-details">
                    <div class="detail-row">
                        <span class="detail-label">"Owned for:"</span>
                        <span class="detail-value">{move || item.with(Item::ownership_label)}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">"Last used:"</span>
                        <span class="detail-value">{move || item.with(Item::last_used_label)}</span>
                    </div>

                    {on_status_change.map(|on_status_change| view! {
                        <div class="status-buttons">
                            {ItemStatus::ALL.into_iter().map(|status| view! {
                                <button
                                    class=move || item.with(|item| status_button_class(status, item.status))
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        on_status_change.run((id(), status));
                                    }
                                >
                                    {status.as_str()}
                                </button>
                            }).collect_view()}
                        </div>
                    })}

                    <div class="card-actions">
                        {on_edit.map(|_| view! {
                            <button
                                class="card-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_editing.set(true);
                                }
                            >
                                "Edit"
                            </button>
                        })}
                        {on_delete.map(|on_delete| view! {
                            <DeleteConfirmButton on_confirm=move |_| on_delete.run(id()) />
                        })}
                    </div>
                </div>
            </Show>

            {on_edit.map(|on_edit| view! {
                <Show when=move || editing.get()>
                    <ItemEditForm
                        item=item.get_untracked()
                        on_save=move |update: ItemUpdate| {
                            set_editing.set(false);
                            on_edit.run((id(), update));
                        }
                        on_cancel=move |_| set_editing.set(false)
                    />
                </Show>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_button_highlights_current() {
        assert_eq!(status_button_class(ItemStatus::Give, ItemStatus::Give), "status-btn active give");
        assert_eq!(status_button_class(ItemStatus::Keep, ItemStatus::Give), "status-btn");
    }
}
