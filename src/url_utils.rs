//! URL resolution and image URL normalization.
//!
//! Both functions are best-effort and never fail: malformed input that cannot
//! be parsed even after prefixing with the origin comes back unchanged rather
//! than as an error. Every URL leaving the engine goes through [`resolve`].

use url::Url;

/// Query strings longer than this are dropped from image URLs. The site's CDN
/// appends opaque signed tokens that break some downstream image loaders,
/// while short query parameters (resize hints) are worth keeping.
pub const MAX_IMAGE_QUERY_LEN: usize = 64;

/// Convert a candidate href into a fully-qualified absolute URL.
///
/// * `None` or empty input yields `None`.
/// * `//host/...` is treated as scheme-relative to `https:`.
/// * `/path` and other relative forms resolve against `origin`.
/// * Already-absolute input is returned as-is, making resolution idempotent.
/// * Unparseable input is returned unchanged (best-effort, never errors).
#[must_use]
pub fn resolve(href: Option<&str>, origin: &str) -> Option<String> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    match Url::parse(origin).and_then(|base| base.join(href)) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(_) => Some(href.to_string()),
    }
}

/// Resolve an image href and drop oversized query strings.
///
/// Composes [`resolve`], then removes the query string entirely when it
/// exceeds [`MAX_IMAGE_QUERY_LEN`]. Idempotent; on any parse failure the
/// resolved string is returned verbatim.
#[must_use]
pub fn normalize_image(href: Option<&str>, origin: &str) -> Option<String> {
    let resolved = resolve(href, origin)?;
    match Url::parse(&resolved) {
        Ok(mut parsed) => {
            if parsed.query().is_some_and(|q| q.len() > MAX_IMAGE_QUERY_LEN) {
                parsed.set_query(None);
            }
            Some(parsed.to_string())
        }
        Err(_) => Some(resolved),
    }
}
