//! Filter Bar Component
//!
//! Item type chips; clicking the active chip clears the filter.

use leptos::prelude::*;

use crate::models::ItemType;

/// Next filter after clicking `clicked` while `current` is active
pub fn toggle_filter(current: Option<ItemType>, clicked: ItemType) -> Option<ItemType> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Type filter chips for a list view
#[component]
pub fn FilterBar(
    #[prop(into)] selected: Signal<Option<ItemType>>,
    #[prop(into)] on_filter_change: Callback<Option<ItemType>>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {ItemType::ALL.into_iter().map(|item_type| {
                let is_selected = move || selected.get() == Some(item_type);
                view! {
                    <button
                        class=move || if is_selected() { "filter-chip active" } else { "filter-chip" }
                        on:click=move |_| {
                            on_filter_change.run(toggle_filter(selected.get_untracked(), item_type))
                        }
                    >
                        {item_type.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_filter() {
        assert_eq!(toggle_filter(None, ItemType::Vehicle), Some(ItemType::Vehicle));
        assert_eq!(toggle_filter(Some(ItemType::Vehicle), ItemType::Vehicle), None);
        assert_eq!(
            toggle_filter(Some(ItemType::Vehicle), ItemType::Clothing),
            Some(ItemType::Clothing)
        );
    }
}
