//! Site heuristics as data.
//!
//! Every field the engine extracts has an ordered list of candidate locations,
//! most specific first, evaluated by the chain runner in [`crate::locator`].
//! The site is a Madara-flavored WordPress install whose themes rename
//! containers between pages and releases; these tables encode the known
//! variation space so extraction survives markup drift without code changes.

/// Item containers on listing pages, structured theme markup first.
pub static LISTING_CONTAINERS: &[&str] = &[
    ".page-item-detail",
    ".c-tabs-item__content",
    ".manga__item",
    ".utao .uta",
    ".bsx",
    ".listupd > div",
    "article",
];

/// Looser second-pass containers, scanned only when the primary pass yields
/// zero usable items.
pub static LISTING_CONTAINERS_LOOSE: &[&str] = &[".item", "li.novel-item", ".list-item", "li"];

/// Link shapes carrying a work's title and URL, heading links preferred over
/// bare anchors.
pub static TITLE_LINKS: &[&str] = &[
    ".post-title h3 a",
    ".post-title h4 a",
    ".post-title a",
    "h3 a",
    "h4 a",
    "h5 a",
    ".item-summary a",
    ".tt a",
    "a[title]",
    "a",
];

/// Cover image shapes inside a listing item.
pub static LISTING_COVERS: &[&str] = &[".item-thumb img", ".manga-poster img", "img"];

/// Author credit inside a listing item.
pub static LISTING_AUTHORS: &[&str] = &[
    ".mg_author .summary-content",
    ".summary-author",
    ".author",
];

/// Summary/excerpt inside a listing item.
pub static LISTING_SUMMARIES: &[&str] = &[
    ".item-summary .excerpt",
    ".excerpt",
    ".manga-excerpt",
    ".desc",
    ".summary p",
];

/// Publication/update date inside a listing item.
pub static LISTING_DATES: &[&str] = &[".post-on", ".chapter-date", "time"];

/// Title on a detail page; the document `<title>` is a terminal fallback
/// handled by the detail extractor itself.
pub static DETAIL_TITLES: &[&str] = &[
    ".post-title h1",
    ".manga-title h1",
    "h1.entry-title",
    "#manga-title",
    ".post-title h3",
    "h1",
];

/// Cover image on a detail page.
pub static DETAIL_COVERS: &[&str] = &[
    ".summary_image img",
    ".tab-summary img",
    ".manga-poster img",
    ".thumb img",
    ".post-thumb img",
];

/// Description containers on a detail page.
pub static DESCRIPTIONS: &[&str] = &[
    ".description-summary .summary__content",
    ".summary__content",
    ".manga-summary",
    ".description",
    "#description",
    ".post-content .manga-excerpt",
];

/// List-like metadata rows holding author/status/genre labels.
pub static META_ITEMS: &[&str] = &[
    ".post-content_item",
    ".manga-info li",
    ".post-status .post-content_item",
    ".detail li",
    ".summary_content li",
];

/// Child of a metadata row that carries the value without its label.
pub static META_VALUE: &str = ".summary-content";

/// Dedicated author links, used only when no metadata rows exist at all.
pub static AUTHOR_LINKS: &[&str] = &[
    ".author-content a",
    ".artist-content a",
    "a[href*='/author/']",
    "a[href*='/artist/']",
];

/// Genre/tag anchors found anywhere on a detail page.
pub static GENRE_ANCHORS: &[&str] =
    &[".genres-content a", "a[href*='/genre/'], a[href*='/genres/']", "a[rel='tag']"];

/// Chapter anchors on a detail (or table-of-contents) page.
pub static CHAPTER_ANCHORS: &[&str] = &[
    "li.wp-manga-chapter > a",
    ".listing-chapters_wrap a",
    ".chapter-list a",
    ".version-chap li a",
    "ul.chapters a",
    ".eplister a",
    "#chapterlist a",
];

/// Upload-date node searched in a chapter anchor's row.
pub static CHAPTER_DATES: &str = ".chapter-release-date, .post-on, time";

/// Link text marking a secondary chapter-list page.
pub static TOC_LINK_TERMS: &[&str] = &["table of contents", "chapters", "view all"];

/// Chapter body containers, structured reader markup first.
pub static CONTENT_CONTAINERS: &[&str] = &[
    ".reading-content",
    ".read-container .entry-content",
    ".reader-area",
    "#chapter-content",
    ".chapter-content",
    ".text-left",
    ".entry-content",
];

/// Article-like ancestors used by the largest-block content fallback.
pub static CONTENT_ANCESTORS: &str = "article, .post, .entry, main, #content";

/// Non-content nodes removed wholesale during sanitization.
pub static CONTENT_JUNK: &[&str] = &[
    ".ads",
    ".ad",
    ".adsbygoogle",
    ".ad-container",
    ".sharedaddy",
    ".share",
    ".sharethis",
    ".social-share",
    ".related",
    ".related-posts",
    ".jp-relatedposts",
    ".post-navigation",
    ".nav-links",
    ".comments-area",
    ".code-block",
];

/// Image source attributes used by lazy loaders, checked before `src`.
pub static LAZY_SRC_ATTRS: &[&str] = &[
    "data-src",
    "data-lazy-src",
    "data-cfsrc",
    "data-original",
    "srcset",
    "data-srcset",
];

/// Navigation affordances signalling that an older/next page exists.
pub static PAGINATION: &[&str] = &[
    ".nav-previous",
    ".nav-next",
    "a.next.page-numbers",
    ".pagination .next",
    ".wp-pagenavi .nextpostslink",
    ".paging-navigation a",
];
