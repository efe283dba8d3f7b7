//! Min-Now Frontend App
//!
//! Navigation bar over the page matched by the router.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NavBar;
use crate::context::AppContext;
use crate::theme::ThemeProvider;
use crate::views::{CalculatorView, DonatedView, GiveView, HomeView, KeepView};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    view! {
        <ThemeProvider>
            <Router>
                <div class="app-layout">
                    <NavBar />
                    <main class="main-content">
                        <Routes fallback=|| view! { <HomeView /> }>
                            <Route path=path!("/") view=HomeView />
                            <Route path=path!("/keep") view=KeepView />
                            <Route path=path!("/give") view=GiveView />
                            <Route path=path!("/donated") view=DonatedView />
                            <Route path=path!("/calculator") view=CalculatorView />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ThemeProvider>
    }
}
