//! Post-login redirect target selection.

use super::lookup::{get_query_parameter_with, LookupMode};

/// Query parameter carrying the page to return to after sign-in.
pub const NEXT_PARAM: &str = "next";

/// Picks the redirect target for `url`: its `next` value, or `default_url`
/// when `next` is missing or empty.
///
/// The `next` value is returned verbatim; it is neither decoded nor checked
/// against the current origin.
pub fn resolve_redirect_target(url: &str, default_url: &str) -> String {
    resolve_redirect_target_with(LookupMode::Substring, url, default_url)
}

/// Like [`resolve_redirect_target`] with an explicit [`LookupMode`].
///
/// An unbound `next` (substring pre-check passed, nothing parsed) also
/// falls back to `default_url`.
pub fn resolve_redirect_target_with(mode: LookupMode, url: &str, default_url: &str) -> String {
    match get_query_parameter_with(mode, url, NEXT_PARAM, "") {
        Some(next) if !next.is_empty() => next,
        _ => default_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_next() {
        assert_eq!(
            resolve_redirect_target("http://x/?next=/home", "/default"),
            "/home"
        );
    }

    #[test]
    fn no_query_uses_default() {
        assert_eq!(resolve_redirect_target("http://x/", "/default"), "/default");
    }

    #[test]
    fn empty_next_uses_default() {
        assert_eq!(
            resolve_redirect_target("http://x/?next=", "/default"),
            "/default"
        );
    }

    #[test]
    fn next_is_not_decoded() {
        assert_eq!(
            resolve_redirect_target("http://x/login?next=%2Faccount%2Fchannels", "/"),
            "%2Faccount%2Fchannels"
        );
    }

    #[test]
    fn unbound_next_after_false_positive_uses_default() {
        assert_eq!(
            resolve_redirect_target("http://x/nextpage?other=1", "/default"),
            "/default"
        );
        assert_eq!(
            resolve_redirect_target_with(
                LookupMode::Structural,
                "http://x/nextpage?other=1",
                "/default"
            ),
            "/default"
        );
    }

    #[test]
    fn external_next_is_returned_as_is() {
        assert_eq!(
            resolve_redirect_target("http://x/?next=https://evil.example/", "/"),
            "https://evil.example/"
        );
    }
}
