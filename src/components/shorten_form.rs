use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::error::SubmitError;
use crate::models::{AppState, ShortenedLink};
use crate::services::{create_short_url, validate_long_url};

/// URL input form with submit button and inline error display.
#[component]
pub fn ShortenForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context missing");

    // Create a node reference for the input element
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Auto-focus the input on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let html_input: &HtmlInputElement = &input;
            let _ = html_input.focus();
        }
    });

    // Handle input changes
    let on_input = move |ev: leptos::ev::Event| {
        state.long_url.set(event_target_value(&ev));
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_url(state);
    };

    view! {
        <form class="shorten-form" on:submit=on_submit>
            <input
                type="url"
                class="url-input"
                node_ref=input_ref
                prop:value=move || state.long_url.get()
                on:input=on_input
                prop:disabled=move || state.is_input_disabled()
                placeholder="Enter your long URL here..."
                required=true
            />
            <button
                type="submit"
                class="submit-button"
                prop:disabled=move || state.is_input_disabled()
            >
                {move || {
                    if state.is_submitting.get() {
                        "Shortening..."
                    } else {
                        "Create Short Link"
                    }
                }}
            </button>
            <Show when=move || state.error.get().is_some()>
                <p class="form-error">{move || state.error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}

/// Run one submission: validate, call the shortening service, update state.
fn submit_url(state: AppState) {
    // One outstanding request at a time
    if state.is_submitting.get() {
        return;
    }

    let long_url = state.long_url.get();

    // Don't submit blank input
    if long_url.trim().is_empty() {
        return;
    }

    state.begin_submission();

    // Validation is synchronous; invalid input never reaches the network
    if let Err(err) = validate_long_url(&long_url) {
        state.fail_submission(SubmitError::from(err).to_string());
        return;
    }

    // Spawn async task for the single network round trip
    spawn_local(async move {
        match create_short_url(&long_url).await {
            Ok(short_url) => {
                state.finish_submission(ShortenedLink::new(long_url, short_url));
            }
            Err(err) => {
                let err = SubmitError::from(err);
                web_sys::console::error_1(
                    &format!("Error shortening URL: {}", err.detail()).into(),
                );
                state.fail_submission(err.to_string());
            }
        }
    });
}
