//! Navigation Bar Component
//!
//! Category tabs with checkup indicators, plus the theme toggle. The router
//! marks the link of the current page with `aria-current="page"`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::use_checkup_status;
use crate::route::Page;
use crate::theme::{use_theme, Theme};

#[component]
fn NavTab(page: Page, icon: &'static str) -> impl IntoView {
    let due = page.checkup_type().map(use_checkup_status);

    view! {
        <A href=page.path() attr:class="nav-tab">
            <span class="nav-icon">{icon}</span>
            {page.label()}
            {due.map(|due| view! {
                <Show when=move || due.get()>
                    <span class="due-dot" title="Checkup due"></span>
                </Show>
            })}
        </A>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class="nav-bar">
            <A href=Page::Home.path() exact=true attr:class="brand">
                "Min-Now"
            </A>
            <div class="nav-tabs">
                {Page::TABS.into_iter().map(|(page, icon)| view! {
                    <NavTab page=page icon=icon />
                }).collect_view()}
            </div>
            <div class="nav-actions">
                <NavTab page=Page::Calculator icon="+" />
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.theme.get() {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀️",
                    }}
                </button>
            </div>
        </nav>
    }
}
