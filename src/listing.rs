//! Listing page extraction.
//!
//! Turns a document believed to contain a list of works into ordered
//! [`WorkSummary`] records. The first item-container pattern that matches is
//! used exclusively; patterns are never merged. Items missing a link or a
//! name are silently dropped rather than failing the whole listing.

use dom_query::{Document, Selection};

use crate::dom;
use crate::locator::{self, Strategy};
use crate::model::WorkSummary;
use crate::selectors;
use crate::text;

/// Extract all usable work summaries from a listing document.
///
/// Runs the structured container patterns first; if none of their matches
/// produce a usable item, a looser generic-container pass is the last resort.
#[must_use]
pub fn extract_listing(doc: &Document, origin: &str) -> Vec<WorkSummary> {
    let root = doc.select("html");
    for containers in [selectors::LISTING_CONTAINERS, selectors::LISTING_CONTAINERS_LOOSE] {
        for pattern in containers {
            let matches = root.select(pattern);
            if matches.nodes().is_empty() {
                continue;
            }
            let items = collect_items(&matches, origin);
            if !items.is_empty() {
                return items;
            }
            // First matching pattern is exclusive within its pass.
            break;
        }
    }
    Vec::new()
}

/// Deduplicate by absolute URL, first occurrence wins, order preserved.
#[must_use]
pub fn dedup_by_url(items: Vec<WorkSummary>) -> Vec<WorkSummary> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.url.clone()))
        .collect()
}

fn collect_items(containers: &Selection, origin: &str) -> Vec<WorkSummary> {
    dom::each(containers)
        .filter_map(|item| extract_item(&item, origin))
        .collect()
}

/// One item container to one summary; `None` drops the item silently.
fn extract_item(item: &Selection, origin: &str) -> Option<WorkSummary> {
    let (name, url) = locator::locate_link(item, selectors::TITLE_LINKS, origin)?;

    let cover_chain: Vec<Strategy> = selectors::LISTING_COVERS
        .iter()
        .copied()
        .map(|selector| Strategy {
            selector,
            extract: locator::image_source,
        })
        .collect();
    let cover = locator::locate(item, &cover_chain, origin);

    let author = locator::locate_text(item, selectors::LISTING_AUTHORS, origin)
        .map(|raw| text::strip_author_prefix(&raw))
        .filter(|author| !author.is_empty());
    let summary = locator::locate_text(item, selectors::LISTING_SUMMARIES, origin);
    let published_at = locator::locate_text(item, selectors::LISTING_DATES, origin);

    Some(WorkSummary {
        name,
        url,
        cover,
        author,
        summary,
        published_at,
    })
}
