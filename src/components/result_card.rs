use leptos::prelude::*;
use leptos::tachys::dom::window;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::ShortenedLink;

/// How long the per-entry "Copied!" indicator stays visible, in milliseconds.
const COPIED_RESET_MS: i32 = 2000;

/// One history entry: original URL, short link, and a copy button whose
/// pressed state reverts on its own.
#[component]
pub fn ResultCard(link: ShortenedLink) -> impl IntoView {
    // Per-entry indicator; timeout handling without complex cleanup
    let copied = RwSignal::new(false);
    let reset_handle = std::rc::Rc::new(std::cell::Cell::new(None::<i32>));

    let short_url = link.short_url.clone();
    let on_copy = {
        let reset_handle = std::rc::Rc::clone(&reset_handle);
        move |_| {
            copy_to_clipboard(short_url.clone());
            copied.set(true);

            // Cancel any pending revert before scheduling a new one
            if let Some(handle) = reset_handle.get() {
                window().clear_timeout_with_handle(handle);
            }

            let callback: wasm_bindgen::prelude::Closure<dyn FnMut()> =
                wasm_bindgen::closure::Closure::new(move || {
                    copied.set(false);
                });

            // set_timeout_with_callback returns a handle we can use to cancel
            if let Ok(handle) = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                COPIED_RESET_MS,
            ) {
                reset_handle.set(Some(handle));
                // Keep the closure alive for the timeout duration
                callback.forget();
            }
        }
    };

    view! {
        <div class="result-card">
            <div class="result-urls">
                <p class="original-url">{link.original_url.clone()}</p>
                <a
                    class="short-url"
                    href=link.href()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {link.short_url.clone()}
                </a>
            </div>
            <button class="copy-button" on:click=on_copy>
                {move || if copied.get() { "Copied!" } else { "Copy" }}
            </button>
        </div>
    }
}

/// Write the short URL to the system clipboard. Best effort: failures are
/// logged and otherwise ignored.
fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();

    spawn_local(async move {
        if let Err(e) = JsFuture::from(clipboard.write_text(&text)).await {
            web_sys::console::warn_1(&format!("Clipboard write failed: {e:?}").into());
        }
    });
}
