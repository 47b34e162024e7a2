//! Pagination detection.
//!
//! The site exposes no total-count metadata, so continuation is a binary
//! signal: a next/older navigation affordance either exists or it does not.

use dom_query::Document;

use crate::selectors;

/// True iff the document contains any next/older navigation node.
#[must_use]
pub fn has_next_page(doc: &Document) -> bool {
    selectors::PAGINATION
        .iter()
        .any(|selector| doc.select(selector).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn detects_nav_previous() {
        let doc = dom::parse(r#"<div class="nav-previous"><a href="/page/2/">Older</a></div>"#);
        assert!(has_next_page(&doc));
    }

    #[test]
    fn detects_next_page_numbers() {
        let doc = dom::parse(r#"<a class="next page-numbers" href="/page/3/">Next</a>"#);
        assert!(has_next_page(&doc));
    }

    #[test]
    fn false_on_empty_document() {
        let doc = dom::parse("<html><body></body></html>");
        assert!(!has_next_page(&doc));
    }
}
