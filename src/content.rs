//! Chapter body isolation and sanitization.
//!
//! Selection walks the content-container chain, then degrades to the largest
//! text block under an article-like ancestor, then to the ancestor itself,
//! and finally to a fixed placeholder. Sanitization strips executable and
//! non-content nodes, event-handler attributes, and rewrites every image to a
//! single unambiguous absolute `src`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::locator;
use crate::selectors;
use crate::text;

/// Containers with trimmed text at or below this length are not plausible
/// chapter bodies.
const MIN_CONTENT_LEN: usize = 10;

/// Emitted when no candidate container holds any content at all.
pub const CONTENT_NOT_FOUND: &str = "<p>Content not found.</p>";

/// Isolate the best-candidate body fragment from a chapter document.
#[must_use]
pub fn select_content(doc: &Document) -> String {
    let root = doc.select("html");
    for selector in selectors::CONTENT_CONTAINERS {
        for container in dom::each(&root.select(selector)) {
            if text::clean(&container.text()).len() > MIN_CONTENT_LEN {
                return container.inner_html().to_string();
            }
        }
    }
    if let Some(ancestor) = dom::first(&root.select(selectors::CONTENT_ANCESTORS)) {
        if let Some(block) = largest_text_block(&ancestor) {
            return block;
        }
        if !text::clean(&ancestor.text()).is_empty() {
            return ancestor.inner_html().to_string();
        }
    }
    CONTENT_NOT_FOUND.to_string()
}

/// The block-level descendant with the single largest text length.
fn largest_text_block(ancestor: &Selection) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    for block in dom::each(&ancestor.select("div, section, p")) {
        let len = text::clean(&block.text()).len();
        if len > MIN_CONTENT_LEN && best.as_ref().is_none_or(|(max, _)| len > *max) {
            best = Some((len, block.inner_html().to_string()));
        }
    }
    best.map(|(_, html)| html)
}

/// Sanitize an isolated content fragment.
///
/// Removes script/style/iframe/noscript and known ad/share/related/navigation
/// nodes, strips every `on*` attribute (case-insensitive prefix) from every
/// remaining node, and rewrites each image's effective source: lazy-load
/// attribute preferred, resolved and normalized, written back as `src` with
/// the lazy markers removed.
#[must_use]
pub fn sanitize(fragment: &str, origin: &str) -> String {
    let doc = dom::parse_fragment(fragment);

    doc.select("script, style, iframe, noscript").remove();
    for selector in selectors::CONTENT_JUNK {
        doc.select(selector).remove();
    }

    for node in dom::each(&doc.select("*")) {
        for (name, _) in dom::get_all_attributes(&node) {
            if name.to_ascii_lowercase().starts_with("on") {
                dom::remove_attribute(&node, &name);
            }
        }
    }

    for img in dom::each(&doc.select("img")) {
        if let Some(source) = locator::image_source(&img, origin) {
            dom::set_attribute(&img, "src", &source);
        }
        for attr in selectors::LAZY_SRC_ATTRS {
            dom::remove_attribute(&img, attr);
        }
    }

    doc.select("body").inner_html().to_string()
}
