//! Location resolution
//!
//! A location is either a full URL or a short name such as `beta.json` that
//! is expanded against the registry's known URLs.

use crate::modlist::constants::FULL_URL_MARKER;

/// Whether `location` is already a full URL
pub fn is_full_url(location: &str) -> bool {
    location.contains(FULL_URL_MARKER)
}

/// Expand a short location against `known_urls`.
///
/// Returns the first known URL containing `location`. When nothing matches the
/// location is passed through unchanged and the fetch step reports the failure.
pub fn resolve_location<S: AsRef<str>>(location: &str, known_urls: &[S]) -> String {
    if is_full_url(location) {
        return location.to_string();
    }

    for url in known_urls {
        let url: &str = url.as_ref();
        if url.contains(location) {
            tracing::debug!("Resolved {} to {}", location, url);
            return url.to_string();
        }
    }

    tracing::warn!("No known mod list matches {}, using it as-is", location);
    location.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [&str; 2] = ["https://a/alpha.json", "https://a/beta.json"];

    #[test]
    fn test_full_url_passes_through() {
        assert!(is_full_url("https://host/list.json"));
        assert_eq!(
            resolve_location("https://host/list.json", &KNOWN),
            "https://host/list.json"
        );
        // Not consulted at all
        assert_eq!(
            resolve_location::<&str>("https://host/list.json", &[]),
            "https://host/list.json"
        );
    }

    #[test]
    fn test_short_name_resolves() {
        assert_eq!(resolve_location("beta.json", &KNOWN), "https://a/beta.json");
        assert_eq!(resolve_location("alpha", &KNOWN), "https://a/alpha.json");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(resolve_location(".json", &KNOWN), "https://a/alpha.json");
    }

    #[test]
    fn test_miss_passes_through() {
        assert_eq!(resolve_location("gamma.json", &KNOWN), "gamma.json");
    }

    #[test]
    fn test_plain_http_is_not_full_url() {
        assert!(!is_full_url("http://a/alpha.json"));
        assert_eq!(
            resolve_location("http://a/alpha.json", &KNOWN),
            "http://a/alpha.json"
        );
    }
}
