use leptos::prelude::*;

#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <div class="page home">
            <h1>"Welcome to Min-Now"</h1>
            <p class="subtitle">"Select a tab above to manage your belongings"</p>
        </div>
    }
}
