//! Checkup Manager Component
//!
//! Modal for reviewing a category and setting its checkup interval.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, clamp_interval, ItemUpdate, NewCheckup};
use crate::context::use_app_context;
use crate::hooks::use_latest_checkup;
use crate::models::{CheckupType, Item, ItemStatus};

/// How long the saved confirmation stays up before the modal closes
const SAVED_DELAY_MS: u32 = 1500;

/// Apply a stepper click to the current interval
pub fn step_interval(current: u32, delta: i64) -> u32 {
    clamp_interval(current as i64 + delta)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed,
}

/// Checkup configuration and review modal
#[component]
pub fn CheckupManager(
    checkup_type: CheckupType,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let latest = use_latest_checkup(checkup_type);

    let (interval, set_interval) = signal(1u32);
    let (items, set_items) = signal(Vec::<Item>::new());
    let (changed, set_changed) = signal(HashSet::<String>::new());
    let (save_state, set_save_state) = signal(SaveState::Idle);

    // Seed the stepper from the configured checkup once it arrives
    Effect::new(move |_| {
        if let Some(checkup) = latest.get() {
            set_interval.set(clamp_interval(checkup.checkup_interval_months as i64));
        }
    });

    spawn_local(async move {
        match api::fetch_items_by_status(checkup_type.item_status()).await {
            Ok(loaded) => set_items.set(loaded),
            Err(e) => error!("[CHECKUP] {}", e),
        }
    });

    // May run after the 1.5 s delay, when the owning view could be gone
    let close = move || {
        ctx.reload();
        on_close.try_run(());
    };

    let mark_item = move |id: String, status: ItemStatus| {
        spawn_local(async move {
            match api::update_item(&id, &ItemUpdate::status(status)).await {
                Ok(updated) => {
                    log!("[CHECKUP] {} marked {}", updated.id, updated.status.as_str());
                    set_items.update(|items| {
                        if let Some(item) = items.iter_mut().find(|i| i.id == updated.id) {
                            *item = updated;
                        }
                    });
                    set_changed.update(|set| {
                        set.insert(id);
                    });
                }
                Err(e) => error!("[CHECKUP] {}", e),
            }
        });
    };

    let submit = move |_| {
        if save_state.get_untracked() == SaveState::Saving {
            return;
        }
        set_save_state.set(SaveState::Saving);
        let months = interval.get_untracked();
        let existing = latest.get_untracked().map(|c| c.id);

        spawn_local(async move {
            let result = match existing {
                Some(id) => api::update_checkup_interval(id, months).await,
                None => api::create_checkup(&NewCheckup::new(checkup_type, months)).await,
            };
            match result {
                Ok(checkup) => {
                    log!("[CHECKUP] Saved checkup {} every {} months", checkup.id, checkup.checkup_interval_months);
                    set_save_state.set(SaveState::Saved);
                    TimeoutFuture::new(SAVED_DELAY_MS).await;
                    close();
                }
                Err(e) => {
                    error!("[CHECKUP] {}", e);
                    set_save_state.set(SaveState::Failed);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal checkup-manager">
                <div class="modal-header">
                    <h2>{format!("{} Checkup", checkup_type.label())}</h2>
                    <button class="close-btn" on:click=move |_| close()>"✕"</button>
                </div>

                <div class="interval-stepper">
                    <span>"Check every"</span>
                    <button
                        class="stepper-btn"
                        on:click=move |_| set_interval.update(|m| *m = step_interval(*m, -1))
                    >
                        "−"
                    </button>
                    <span class="interval-value">{move || interval.get()}</span>
                    <button
                        class="stepper-btn"
                        on:click=move |_| set_interval.update(|m| *m = step_interval(*m, 1))
                    >
                        "+"
                    </button>
                    <span>{move || if interval.get() == 1 { "month" } else { "months" }}</span>
                </div>

                <div class="review-list">
                    <h3>"Review your items"</h3>
                    <Show
                        when=move || !items.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"Nothing to review."</p> }
                    >
                        <For
                            each=move || items.get()
                            key=|item| (item.id.clone(), item.status)
                            children=move |item| {
                                let id = StoredValue::new(item.id.clone());
                                let is_changed = move || changed.with(|set| set.contains(&id.get_value()));
                                view! {
                                    <div class="review-row" class:changed=is_changed>
                                        <span class="item-emoji">{item.picture_url.clone()}</span>
                                        <span class="item-name">{item.name.clone()}</span>
                                        <span class="item-status">{item.status.as_str()}</span>
                                        <button
                                            class="status-btn"
                                            on:click=move |_| mark_item(id.get_value(), ItemStatus::Keep)
                                        >
                                            "Keep"
                                        </button>
                                        <button
                                            class="status-btn"
                                            on:click=move |_| mark_item(id.get_value(), ItemStatus::Give)
                                        >
                                            "Give"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>

                <div class="form-actions">
                    <Show when=move || save_state.get() == SaveState::Failed>
                        <span class="error-text">"Could not save checkup"</span>
                    </Show>
                    <button
                        class="primary-btn"
                        disabled=move || matches!(save_state.get(), SaveState::Saving | SaveState::Saved)
                        on:click=submit
                    >
                        {move || match save_state.get() {
                            SaveState::Saving => "Saving...",
                            SaveState::Saved => "Saved ✓",
                            SaveState::Idle | SaveState::Failed => "Save",
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interval_stays_in_range() {
        let mut months = 1;
        for _ in 0..20 {
            months = step_interval(months, 1);
        }
        assert_eq!(months, 12);
        for _ in 0..20 {
            months = step_interval(months, -1);
        }
        assert_eq!(months, 1);
    }

    #[test]
    fn test_step_interval_single_steps() {
        assert_eq!(step_interval(3, 1), 4);
        assert_eq!(step_interval(3, -1), 2);
        assert_eq!(step_interval(1, -1), 1);
        assert_eq!(step_interval(12, 1), 12);
    }
}
