//! Field locator: the shared fallback-chain runner.
//!
//! Every logical field is described by an ordered sequence of
//! (selector, extraction) pairs. The runner evaluates them in order and
//! accepts the first structurally-plausible result: a selector must match at
//! least one node and its extraction must yield non-empty trimmed text (or a
//! resolvable href). Exhausting the chain is an extraction miss, represented
//! as `None`, never an error.

use dom_query::Selection;

use crate::dom;
use crate::selectors::LAZY_SRC_ATTRS;
use crate::text;
use crate::url_utils;

/// Extraction half of a strategy: node plus site origin in, candidate value out.
pub type ExtractFn = fn(&Selection, &str) -> Option<String>;

/// One (selector, extraction) pair of a fallback chain.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// CSS selector locating candidate nodes.
    pub selector: &'static str,
    /// Extraction applied to each matched node.
    pub extract: ExtractFn,
}

/// Run a fallback chain and return the first valid result.
///
/// For each strategy in order, every matched node is tried in document order;
/// the first non-empty extraction wins and all later strategies are ignored.
#[must_use]
pub fn locate(root: &Selection, chain: &[Strategy], origin: &str) -> Option<String> {
    for strategy in chain {
        let matches = root.select(strategy.selector);
        for node in dom::each(&matches) {
            if let Some(value) = (strategy.extract)(&node, origin) {
                if !value.trim().is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Convenience for the common all-text chain: same extraction, many selectors.
#[must_use]
pub fn locate_text(root: &Selection, selectors: &[&'static str], origin: &str) -> Option<String> {
    for selector in selectors.iter().copied() {
        let strategy = Strategy {
            selector,
            extract: cleaned_text,
        };
        if let Some(value) = locate(root, &[strategy], origin) {
            return Some(value);
        }
    }
    None
}

/// First anchor (by selector priority) carrying both a usable name and a
/// resolvable href. Used for listing title links and chapter anchors, where
/// the two halves must come from the same node.
#[must_use]
pub fn locate_link(
    root: &Selection,
    selectors: &[&'static str],
    origin: &str,
) -> Option<(String, String)> {
    for selector in selectors {
        let anchors = root.select(selector);
        for anchor in dom::each(&anchors) {
            let name = anchor_name(&anchor);
            let href = url_utils::resolve(anchor.attr("href").as_deref(), origin);
            if let (Some(name), Some(href)) = (name, href) {
                return Some((name, href));
            }
        }
    }
    None
}

/// Cleaned full text content; `None` when empty.
#[must_use]
pub fn cleaned_text(sel: &Selection, _origin: &str) -> Option<String> {
    let cleaned = text::clean(&sel.text());
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Image source with lazy-load attributes preferred over `src`, resolved and
/// normalized. `srcset`-style values are reduced to their first candidate.
#[must_use]
pub fn image_source(sel: &Selection, origin: &str) -> Option<String> {
    raw_image_source(sel).and_then(|raw| url_utils::normalize_image(Some(&raw), origin))
}

/// The raw preferred image source, before resolution.
#[must_use]
pub fn raw_image_source(sel: &Selection) -> Option<String> {
    for attr in LAZY_SRC_ATTRS {
        if let Some(value) = sel.attr(attr) {
            if let Some(first) = first_source_candidate(&value) {
                return Some(first);
            }
        }
    }
    sel.attr("src")
        .and_then(|value| first_source_candidate(&value))
}

/// First entry of a (possibly srcset-formatted) source attribute.
fn first_source_candidate(value: &str) -> Option<String> {
    let first = value
        .split(',')
        .next()
        .unwrap_or(value)
        .split_whitespace()
        .next()?;
    (!first.is_empty()).then(|| first.to_string())
}

/// Anchor display name: text content, else its `title` attribute.
fn anchor_name(anchor: &Selection) -> Option<String> {
    let from_text = text::clean(&anchor.text());
    if !from_text.is_empty() {
        return Some(from_text);
    }
    let from_title = text::clean(&anchor.attr("title").unwrap_or_default());
    (!from_title.is_empty()).then_some(from_title)
}
