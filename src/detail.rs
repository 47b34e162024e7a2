//! Detail page extraction.
//!
//! Assembles one [`WorkDetail`] from one document. Author, status and genres
//! come from a structured metadata-row scan when the theme provides one; a
//! dedicated author-link chain is the fallback when no metadata rows exist at
//! all. Every field is best-effort: a miss leaves the field empty rather than
//! failing the record.

use dom_query::{Document, Selection};

use crate::dom;
use crate::locator::{self, Strategy};
use crate::model::{ChapterRef, WorkDetail, WorkStatus};
use crate::selectors;
use crate::text;

/// A description container's first paragraph is preferred over the full
/// container text when it is shorter than this, which keeps the summary tight
/// when a theme drops whole chapter bodies into the container.
const SHORT_DESCRIPTION_LEN: usize = 400;

/// Extract a full work record from its detail document.
///
/// `chapters` is supplied by the caller because chapter discovery may need a
/// second document (table-of-contents fallback); the record is immutable once
/// built.
#[must_use]
pub fn extract_detail(
    doc: &Document,
    work_url: &str,
    origin: &str,
    chapters: Vec<ChapterRef>,
) -> WorkDetail {
    let root = doc.select("html");

    let title = locator::locate_text(&root, selectors::DETAIL_TITLES, origin)
        .unwrap_or_else(|| text::clean(&doc.select("head title").text()));

    let cover_chain: Vec<Strategy> = selectors::DETAIL_COVERS
        .iter()
        .copied()
        .map(|selector| Strategy {
            selector,
            extract: locator::image_source,
        })
        .collect();
    let cover = locator::locate(&root, &cover_chain, origin);

    let description = extract_description(&root).unwrap_or_default();

    let meta = scan_metadata(&root);
    let author = meta.author.or_else(|| {
        // Only when the page exposed no metadata rows at all.
        (!meta.found_rows)
            .then(|| locator::locate_text(&root, selectors::AUTHOR_LINKS, origin))
            .flatten()
    });

    let mut genres = meta.genres;
    union_genre_anchors(&root, &mut genres);

    WorkDetail {
        title,
        url: work_url.to_string(),
        cover,
        description,
        author: author.unwrap_or_default(),
        genres,
        status: WorkStatus::from_label(meta.status.as_deref()),
        chapters,
    }
}

/// Description chain with the short-first-paragraph preference.
fn extract_description(root: &Selection) -> Option<String> {
    for selector in selectors::DESCRIPTIONS {
        let containers = root.select(selector);
        let Some(container) = dom::first(&containers) else {
            continue;
        };
        let full = text::clean(&container.text());
        if full.is_empty() {
            continue;
        }
        if let Some(paragraph) = dom::first(&container.select("p")) {
            let lead = text::clean(&paragraph.text());
            if !lead.is_empty() && lead.len() < SHORT_DESCRIPTION_LEN {
                return Some(lead);
            }
        }
        return Some(full);
    }
    None
}

struct MetaScan {
    found_rows: bool,
    author: Option<String>,
    status: Option<String>,
    genres: Vec<String>,
}

/// Classify metadata rows by their lowercased text and strip the label.
fn scan_metadata(root: &Selection) -> MetaScan {
    let mut scan = MetaScan {
        found_rows: false,
        author: None,
        status: None,
        genres: Vec::new(),
    };
    for selector in selectors::META_ITEMS {
        let rows = root.select(selector);
        if rows.nodes().is_empty() {
            continue;
        }
        scan.found_rows = true;
        for row in dom::each(&rows) {
            let full = text::clean(&row.text());
            let lower = full.to_lowercase();
            if lower.contains("author") || lower.contains("artist") {
                let value = row_value(&row, &full, text::strip_author_label);
                if scan.author.is_none() && !value.is_empty() {
                    scan.author = Some(value);
                }
            } else if lower.contains("status") {
                let value = row_value(&row, &full, text::strip_status_label);
                if scan.status.is_none() && !value.is_empty() {
                    scan.status = Some(value);
                }
            } else if lower.contains("genre") || lower.contains("categor") {
                let value = row_value(&row, &full, text::strip_genre_label);
                for genre in value.split(',') {
                    let genre = genre.trim();
                    if !genre.is_empty() {
                        scan.genres.push(genre.to_string());
                    }
                }
            }
        }
        break; // first matching row pattern is exclusive
    }
    scan
}

/// A row's value: its dedicated value child when present, else the row text
/// with the label stripped.
fn row_value(row: &Selection, full_text: &str, strip: fn(&str) -> String) -> String {
    if let Some(value) = dom::first(&row.select(selectors::META_VALUE)) {
        let cleaned = text::clean(&value.text());
        if !cleaned.is_empty() {
            return cleaned;
        }
    }
    strip(full_text)
}

/// Union genres with tag/category anchors found elsewhere in the document.
fn union_genre_anchors(root: &Selection, genres: &mut Vec<String>) {
    for selector in selectors::GENRE_ANCHORS {
        for anchor in dom::each(&root.select(selector)) {
            let genre = text::clean(&anchor.text());
            if genre.is_empty() {
                continue;
            }
            if !genres.iter().any(|g| g.eq_ignore_ascii_case(&genre)) {
                genres.push(genre);
            }
        }
    }
}
