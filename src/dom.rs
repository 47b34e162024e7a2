//! DOM operations adapter.
//!
//! Thin capability layer over the `dom_query` crate: a document node exposes
//! text, attribute read/write, and subtree selection through these functions,
//! so the extractors never depend on the tree representation directly.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril so callers can hold zero-copy text handles
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse a bare markup fragment by wrapping it in a document shell.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Document {
    Document::from(format!("<html><body>{fragment}</body></html>"))
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Get all attributes of the first node as key-value pairs.
///
/// Returns an empty vector if the selection is empty or has no attributes.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// The first matched node of a selection, as its own selection.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}

/// Iterate each matched node as its own selection, in document order.
pub fn each<'a, 'b>(sel: &'b Selection<'a>) -> impl Iterator<Item = Selection<'a>> + 'b {
    sel.nodes().iter().map(|node| Selection::from(*node))
}
