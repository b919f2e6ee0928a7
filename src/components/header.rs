use leptos::prelude::*;

/// Static page header with title and tagline.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="title">"Link Shortener"</h1>
            <p class="tagline">"Create short, memorable links from any long URL."</p>
        </header>
    }
}
