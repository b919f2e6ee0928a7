use thiserror::Error;

/// Uniform message shown to the user for any shortening-service failure.
pub const SHORTEN_FAILED_MESSAGE: &str =
    "Failed to create a short link. Please check the URL and try again.";

/// Fallback message when an unexpected error carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Rejected input, detected before any network request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL including http:// or https://")]
    MissingScheme,
    #[error("Invalid URL: {0}")]
    Malformed(#[from] url::ParseError),
}

/// Failure of the external shortening call.
///
/// `Display` carries the diagnostic detail for the console; the user-facing
/// text is always [`SHORTEN_FAILED_MESSAGE`], applied at the submission
/// boundary by [`SubmitError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorteningError {
    /// Non-success HTTP status from the shortening endpoint
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Empty body, or body that is not an absolute URL
    #[error("Invalid response from shortening service.")]
    InvalidResponse,
    /// Network or browser-interop failure before a response was read
    #[error("request failed: {0}")]
    Transport(String),
}

/// Any failure surfaced by the submission flow, reduced to display text.
///
/// `Display` is the string shown in the form's error slot. Shortening
/// failures are normalized to one message regardless of root cause; the
/// root cause stays available through [`SubmitError::detail`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{SHORTEN_FAILED_MESSAGE}")]
    Shortening(#[from] ShorteningError),
    #[error("{}", if .0.is_empty() { UNKNOWN_ERROR_MESSAGE } else { .0.as_str() })]
    Unknown(String),
}

impl SubmitError {
    /// Diagnostic text for console logging; may differ from the displayed
    /// message.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Shortening(e) => e.to_string(),
            Self::Unknown(m) => m.clone(),
        }
    }
}
