use leptos::prelude::*;

use crate::models::ShortenedLink;

/// Frontend-only reactive state (Leptos signals).
/// Owned by the root component and shared via `use_context()`; components
/// receive snapshots reactively and mutate only through these methods.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Long URL currently typed into the form
    pub long_url: RwSignal<String>,
    /// Session history of shortened links, newest first
    pub history: RwSignal<Vec<ShortenedLink>>,
    /// Is a shorten request currently in flight?
    pub is_submitting: RwSignal<bool>,
    /// Error from the most recent submission (if any)
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create a new app state with default values
    pub fn new() -> Self {
        Self {
            long_url: RwSignal::new(String::new()),
            history: RwSignal::new(Vec::new()),
            is_submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Clear the form input
    pub fn clear_input(&self) {
        self.long_url.set(String::new());
    }

    /// Insert a link at the front of the history (newest first)
    pub fn prepend_history(&self, link: ShortenedLink) {
        self.history.update(|h| h.insert(0, link));
    }

    /// Enter the submitting state, clearing any prior error
    pub fn begin_submission(&self) {
        self.error.set(None);
        self.is_submitting.set(true);
    }

    /// Record a successful shortening and reset the form
    pub fn finish_submission(&self, link: ShortenedLink) {
        self.prepend_history(link);
        self.clear_input();
        self.is_submitting.set(false);
    }

    /// Record a failed submission, keeping the typed input for correction
    pub fn fail_submission(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
        self.is_submitting.set(false);
    }

    /// Check if the form controls should be disabled
    pub fn is_input_disabled(&self) -> bool {
        self.is_submitting.get()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
