use url::Url;

use crate::error::ValidationError;

/// Check a candidate long URL before any network request is made.
/// The scheme prefix check runs first so obviously schemeless input gets
/// the friendlier message instead of a parser error.
pub fn validate_long_url(input: &str) -> Result<(), ValidationError> {
    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err(ValidationError::MissingScheme);
    }
    Url::parse(input)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_http_urls() {
        assert!(validate_long_url("http://example.com").is_ok());
        assert!(validate_long_url("https://example.com/very/long/path?q=1#frag").is_ok());
        assert!(validate_long_url("https://sub.example.co.uk:8443/path").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        for input in [
            "",
            "example.com",
            "www.example.com/path",
            "ftp://example.com",
            "//example.com",
            "HTTP://example.com", // prefix check is case-sensitive, like the display text
            "htp://example.com",
        ] {
            assert_eq!(
                validate_long_url(input),
                Err(ValidationError::MissingScheme),
                "expected missing-scheme rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_urls_with_valid_prefix() {
        for input in ["http://", "https://", "http://exa mple.com"] {
            assert!(
                matches!(validate_long_url(input), Err(ValidationError::Malformed(_))),
                "expected parse failure for {input:?}"
            );
        }
    }

    #[test]
    fn test_missing_scheme_message() {
        let err = validate_long_url("example.com").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid URL including http:// or https://"
        );
    }
}
