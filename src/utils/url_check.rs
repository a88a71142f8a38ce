//! Reference-URL shape check used while loading the catalog

use url::Url;

/// Whether a catalog entry's trailing element plausibly is a documentation
/// URL. Lenient on purpose: upstream data carries one scheme-less wiki link
/// that must load verbatim.
pub fn looks_like_reference_url(candidate: &str) -> bool {
    if let Ok(parsed) = Url::parse(candidate) {
        // "name:en" parses as scheme "name", so require an actual host
        if parsed.has_host() {
            return true;
        }
    }
    candidate.contains('.') && candidate.contains('/') && !candidate.contains(' ')
}
