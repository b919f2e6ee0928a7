use leptos::prelude::*;

use crate::components::ResultCard;
use crate::models::AppState;

/// Session history of shortened links, newest first.
/// Hidden entirely until the first successful shortening.
#[component]
pub fn HistoryList() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");

    view! {
        <Show when=move || !state.history.get().is_empty()>
            <div class="history-list">
                <h2 class="history-title">"Your recent links"</h2>
                <For
                    each=move || state.history.get()
                    key=|link| link.id
                    children=move |link| view! { <ResultCard link=link /> }
                />
            </div>
        </Show>
    }
}
