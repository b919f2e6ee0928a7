use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::ShorteningError;

/// TinyURL "create" endpoint; answers with the short URL as plain text.
/// Swapping providers means changing this module only.
pub const API_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

/// Shorten one URL through the external service.
///
/// Single attempt, no retries, no timeout of our own; the caller suspends
/// until the browser fetch settles. The returned short URL has its scheme
/// prefix stripped for display.
pub async fn create_short_url(long_url: &str) -> Result<String, ShorteningError> {
    let window = web_sys::window()
        .ok_or_else(|| ShorteningError::Transport("no window object".to_string()))?;

    let request = request_url(long_url)?;
    let response = JsFuture::from(window.fetch_with_str(&request))
        .await
        .map_err(transport_error)?;
    let response: Response = response.dyn_into().map_err(|_| {
        ShorteningError::Transport("fetch resolved to a non-Response value".to_string())
    })?;

    if !response.ok() {
        return Err(ShorteningError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    parse_short_url(&body.as_string().unwrap_or_default())
}

/// Build the request URL with the long URL percent-encoded as a query
/// parameter.
pub fn request_url(long_url: &str) -> Result<String, ShorteningError> {
    Url::parse_with_params(API_ENDPOINT, [("url", long_url)])
        .map(String::from)
        .map_err(|e| ShorteningError::Transport(format!("bad request URL: {e}")))
}

/// Validate the plain-text response body and strip the scheme for display.
/// A trailing newline from the provider does not count as malformed.
pub fn parse_short_url(body: &str) -> Result<String, ShorteningError> {
    let body = body.trim();
    if body.is_empty() || !body.starts_with("http") {
        return Err(ShorteningError::InvalidResponse);
    }
    Ok(strip_scheme(body).to_string())
}

/// Remove any leading `http://` or `https://` prefixes. Idempotent, so the
/// stored short URL can never start with a scheme.
pub fn strip_scheme(url: &str) -> &str {
    let mut rest = url;
    while let Some(stripped) = rest
        .strip_prefix("https://")
        .or_else(|| rest.strip_prefix("http://"))
    {
        rest = stripped;
    }
    rest
}

fn transport_error(value: JsValue) -> ShorteningError {
    let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
    ShorteningError::Transport(detail)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_strip_scheme_idempotent_for_any_input(input in ".{0,200}") {
            let once = strip_scheme(&input).to_string();
            let twice = strip_scheme(&once).to_string();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_parsed_short_url_never_keeps_a_scheme_prefix(
            rest in "[a-z0-9./-]{1,40}",
            https in proptest::bool::ANY,
        ) {
            let scheme = if https { "https://" } else { "http://" };
            let body = format!("{scheme}{rest}");

            let parsed = parse_short_url(&body).unwrap();
            prop_assert!(!parsed.starts_with("http://"));
            prop_assert!(!parsed.starts_with("https://"));
        }

        #[test]
        fn test_request_url_always_parses_back(input in ".{0,100}") {
            if let Ok(url) = request_url(&input) {
                let parsed = url::Url::parse(&url).unwrap();
                prop_assert_eq!(parsed.host_str(), Some("tinyurl.com"));
            }
        }
    }
}
