//! Checkup Banner Component
//!
//! Reminder shown above a list when its checkup is due.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::hooks::use_latest_checkup;
use crate::models::CheckupType;

#[component]
pub fn CheckupBanner(
    checkup_type: CheckupType,
    #[prop(into)] on_review: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let latest = use_latest_checkup(checkup_type);
    let (completing, set_completing) = signal(false);

    let due = move || latest.with(|c| c.as_ref().is_some_and(|c| c.is_checkup_due));

    let mark_done = move |_| {
        let Some(checkup) = latest.get_untracked() else {
            return;
        };
        set_completing.set(true);
        spawn_local(async move {
            match api::complete_checkup(checkup.id).await {
                Ok(done) => {
                    log!("[CHECKUP] Completed checkup {} on {}", done.id, done.last_checkup_date);
                    ctx.reload();
                }
                Err(e) => error!("[CHECKUP] {}", e),
            }
            set_completing.set(false);
        });
    };

    view! {
        <Show when=due>
            <div class="checkup-banner">
                <span>{format!("Time for your {} checkup!", checkup_type.as_str())}</span>
                <div class="banner-actions">
                    <button class="secondary-btn" on:click=move |_| on_review.run(())>"Review"</button>
                    <button class="primary-btn" disabled=move || completing.get() on:click=mark_done>
                        "Mark done"
                    </button>
                </div>
            </div>
        </Show>
    }
}
