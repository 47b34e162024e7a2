//! Chapter list discovery.
//!
//! Tiered: chapter anchors on the detail document itself, then a linked
//! table-of-contents page (fetched by the caller), then a synthetic single
//! chapter pointing at the work's own URL. Order is preserved exactly as
//! encountered; the list is neither sorted nor deduplicated, matching the
//! site's own presentation.

use dom_query::{Document, Selection};

use crate::dom;
use crate::model::ChapterRef;
use crate::selectors;
use crate::text;
use crate::url_utils;

/// Tier 1 (and tier 2 against a fetched TOC document): collect chapter refs
/// from the first anchor pattern with at least one match.
///
/// Anchors missing a name or a resolvable href are skipped; an all-skipped
/// pattern leaves the tier empty so discovery can advance.
#[must_use]
pub fn scan_chapters(doc: &Document, origin: &str) -> Vec<ChapterRef> {
    let root = doc.select("html");
    for pattern in selectors::CHAPTER_ANCHORS {
        let anchors = root.select(pattern);
        if anchors.nodes().is_empty() {
            continue;
        }
        let mut chapters = Vec::new();
        for anchor in dom::each(&anchors) {
            let name = text::clean(&anchor.text());
            let Some(url) = url_utils::resolve(anchor.attr("href").as_deref(), origin) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let uploaded_at = chapter_row(&anchor)
                .and_then(|row| dom::first(&row.select(selectors::CHAPTER_DATES)))
                .map(|node| text::clean(&node.text()))
                .filter(|date| !date.is_empty());
            chapters.push(ChapterRef {
                name,
                url,
                uploaded_at,
            });
        }
        return chapters; // first matching pattern is exclusive
    }
    Vec::new()
}

/// The anchor's parent, only when it is a per-chapter row. When anchors are
/// direct children of a shared list wrapper, a date node in that wrapper
/// belongs to one sibling, not to every chapter.
fn chapter_row<'a>(anchor: &Selection<'a>) -> Option<Selection<'a>> {
    let parent = anchor.parent();
    (dom::tag_name(&parent).as_deref() == Some("li")).then_some(parent)
}

/// Tier 2 target: an anchor whose text promises the full chapter list.
#[must_use]
pub fn find_toc_link(doc: &Document, origin: &str) -> Option<String> {
    let anchors = doc.select("a");
    for anchor in dom::each(&anchors) {
        let label = text::clean(&anchor.text()).to_lowercase();
        if selectors::TOC_LINK_TERMS.iter().any(|term| label.contains(term)) {
            if let Some(url) = url_utils::resolve(anchor.attr("href").as_deref(), origin) {
                return Some(url);
            }
        }
    }
    None
}

/// Tier 3: a single-page work read through its own URL.
#[must_use]
pub fn synthetic_chapter(work_url: &str) -> ChapterRef {
    ChapterRef {
        name: "Chapter 1".to_string(),
        url: work_url.to_string(),
        uploaded_at: None,
    }
}
