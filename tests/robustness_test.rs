//! Markup-variation tests: the same logical data served through alternate
//! container shapes must still extract.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use toonscrape::{chapters, content, detail, dom, listing, pagination};

const ORIGIN: &str = "https://toonclan.com";

#[test]
fn listing_survives_alternate_theme_containers() {
    let html = r#"<div>
        <div class="bsx">
            <a href="/manga/alpha/" title="Alpha"><img src="/covers/a.jpg"></a>
        </div>
        <div class="bsx">
            <a href="/manga/beta/" title="Beta"><img src="/covers/b.jpg"></a>
        </div>
    </div>"#;
    let doc = dom::parse(html);
    let items = listing::extract_listing(&doc, ORIGIN);
    assert_eq!(items.len(), 2);
    // Anchor title attribute backs up the image-only link text.
    assert_eq!(items[0].name, "Alpha");
    assert_eq!(items[1].cover.as_deref(), Some("https://toonclan.com/covers/b.jpg"));
}

#[test]
fn listing_cover_long_query_is_dropped() {
    let token = "s".repeat(120);
    let html = format!(
        r#"<article>
            <h3><a href="/manga/alpha/">Alpha</a></h3>
            <img data-src="https://cdn.toonclan.com/a.jpg?signature={token}">
        </article>"#
    );
    let doc = dom::parse(&html);
    let items = listing::extract_listing(&doc, ORIGIN);
    assert_eq!(
        items[0].cover.as_deref(),
        Some("https://cdn.toonclan.com/a.jpg")
    );
}

#[test]
fn detail_survives_definition_list_metadata() {
    let html = r#"<html><head><title>Nightfall Keep</title></head><body>
        <ul class="manga-info">
            <li>Authors: Mara Lune</li>
            <li>Status: on hiatus</li>
            <li>Category: Horror</li>
        </ul>
        <a rel="tag" href="/tag/gothic/">Gothic</a>
    </body></html>"#;
    let doc = dom::parse(html);
    let record = detail::extract_detail(&doc, "https://toonclan.com/manga/nightfall/", ORIGIN, vec![]);
    assert_eq!(record.title, "Nightfall Keep");
    assert_eq!(record.author, "Mara Lune");
    assert_eq!(record.status, toonscrape::WorkStatus::Hiatus);
    assert_eq!(record.genres, ["Horror", "Gothic"]);
}

#[test]
fn chapter_scan_survives_alternate_list_markup() {
    let html = r#"<div class="eplister">
        <a href="/manga/a/ep-2/">Episode 2</a>
        <a href="/manga/a/ep-1/">Episode 1</a>
    </div>"#;
    let doc = dom::parse(html);
    let refs = chapters::scan_chapters(&doc, ORIGIN);
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].url, "https://toonclan.com/manga/a/ep-2/");
}

#[test]
fn content_falls_back_to_ancestor_when_blocks_are_tiny() {
    let html = r#"<main><em>Short but real single-line content.</em></main>"#;
    let doc = dom::parse(html);
    let fragment = content::select_content(&doc);
    assert!(fragment.contains("Short but real single-line content."));
}

#[test]
fn pagination_variants_all_register() {
    for nav in [
        r##"<div class="nav-previous">x</div>"##,
        r##"<div class="pagination"><a class="next" href="#">2</a></div>"##,
        r##"<div class="wp-pagenavi"><a class="nextpostslink" href="#">&gt;</a></div>"##,
    ] {
        let doc = dom::parse(nav);
        assert!(pagination::has_next_page(&doc), "missed: {nav}");
    }
}
