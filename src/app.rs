use leptos::prelude::*;

use crate::components::{Header, HistoryList, ShortenForm};
use crate::models::AppState;

/// Root application component that owns the app state and mounts the page.
#[component]
pub fn App() -> impl IntoView {
    // Initialize app state
    let state = AppState::new();

    // Provide context to all child components
    provide_context(state);

    view! {
        <main class="app">
            <Header />
            <ShortenForm />
            <HistoryList />
        </main>
    }
}
