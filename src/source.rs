//! Entry points consumed by the host reading application.
//!
//! Each operation fetches one or more candidate documents through the
//! [`Fetcher`] collaborator, strictly sequentially, short-circuiting on the
//! first structurally-plausible result. A transport failure on one candidate
//! is logged and control moves to the next; only full exhaustion fails the
//! operation. No caching, no session, no shared mutable state across calls.

use dom_query::Document;
use tracing::{debug, warn};

use crate::chapters;
use crate::content;
use crate::detail;
use crate::dom;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::listing;
use crate::model::{ChapterContent, ChapterRef, Filter, FilterOption, ListingPage, WorkDetail};
use crate::pagination;

/// Default site origin all relative references resolve against.
pub const SITE_ORIGIN: &str = "https://toonclan.com";

/// The extraction engine bound to a fetch collaborator.
pub struct Source<F> {
    fetcher: F,
    origin: String,
}

impl<F: Fetcher> Source<F> {
    /// Engine against the production site origin.
    pub fn new(fetcher: F) -> Self {
        Self::with_origin(fetcher, SITE_ORIGIN)
    }

    /// Engine against a custom origin (mirrors, test fixtures).
    pub fn with_origin(fetcher: F, origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { fetcher, origin }
    }

    /// The origin this engine resolves against.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Static filter catalog. Search remains query-string driven; these are
    /// advertised so the host can render them, not to build URLs here.
    #[must_use]
    pub fn list_filters() -> Vec<Filter> {
        let options = [
            ("Latest", "latest"),
            ("Trending", "trending"),
            ("Most views", "views"),
            ("A-Z", "alphabet"),
        ];
        vec![Filter {
            name: "Order by".to_string(),
            key: "m_orderby".to_string(),
            options: options
                .into_iter()
                .map(|(label, value)| FilterOption {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }]
    }

    /// Popular works, 1-based page.
    pub async fn list_popular(&self, page: u32) -> Result<ListingPage> {
        let candidates = self.archive_candidates(page, &["trending", "views"]);
        self.listing_from(&candidates, "popular listing").await
    }

    /// Latest updates, 1-based page.
    pub async fn list_latest(&self, page: u32) -> Result<ListingPage> {
        let candidates = self.archive_candidates(page, &["latest"]);
        self.listing_from(&candidates, "latest listing").await
    }

    /// Query-string search, 1-based page. `filters` is accepted for interface
    /// parity but does not shape the URL beyond the query itself.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        filters: &[(&str, &str)],
    ) -> Result<ListingPage> {
        if !filters.is_empty() {
            debug!(count = filters.len(), "search filters accepted but not applied");
        }
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let candidates = if page <= 1 {
            vec![
                format!("{}/?s={encoded}&post_type=wp-manga", self.origin),
                format!("{}/?s={encoded}", self.origin),
            ]
        } else {
            vec![
                format!("{}/page/{page}/?s={encoded}&post_type=wp-manga", self.origin),
                format!("{}/?s={encoded}&post_type=wp-manga&paged={page}", self.origin),
            ]
        };
        self.listing_from(&candidates, "search listing").await
    }

    /// Full record for one work, chapter list included.
    pub async fn get_detail(&self, work_url: &str) -> Result<WorkDetail> {
        let doc = self.fetch_document(work_url, &[]).await?;
        let chapters = self.discover_chapters(&doc, work_url).await;
        Ok(detail::extract_detail(&doc, work_url, &self.origin, chapters))
    }

    /// Chapter list for one work, in source document order.
    pub async fn get_chapter_list(&self, work_url: &str) -> Result<Vec<ChapterRef>> {
        let doc = self.fetch_document(work_url, &[]).await?;
        Ok(self.discover_chapters(&doc, work_url).await)
    }

    /// Sanitized body for one chapter. Sends a referer so the site's image
    /// hosts accept the subsequent image loads.
    pub async fn get_chapter_content(&self, chapter_url: &str) -> Result<ChapterContent> {
        let referer = [("Referer", self.origin.as_str())];
        let doc = self.fetch_document(chapter_url, &referer).await?;
        let fragment = content::select_content(&doc);
        Ok(ChapterContent {
            data: content::sanitize(&fragment, &self.origin),
            source_url: chapter_url.to_string(),
        })
    }

    /// Tiered chapter discovery; tier 2 costs one extra fetch and its failure
    /// only advances the tiers, never the whole operation.
    async fn discover_chapters(&self, doc: &Document, work_url: &str) -> Vec<ChapterRef> {
        let found = chapters::scan_chapters(doc, &self.origin);
        if !found.is_empty() {
            return found;
        }
        if let Some(toc_url) = chapters::find_toc_link(doc, &self.origin) {
            debug!(%toc_url, "chapter list empty, following table-of-contents link");
            match self.fetch_document(&toc_url, &[]).await {
                Ok(toc_doc) => {
                    let found = chapters::scan_chapters(&toc_doc, &self.origin);
                    if !found.is_empty() {
                        return found;
                    }
                }
                Err(error) => warn!(%toc_url, %error, "table-of-contents fetch failed"),
            }
        }
        vec![chapters::synthetic_chapter(work_url)]
    }

    /// Sequential candidate loop shared by every listing operation.
    async fn listing_from(&self, candidates: &[String], what: &'static str) -> Result<ListingPage> {
        let mut fetched_any = false;
        for url in candidates {
            let doc = match self.fetch_document(url, &[]).await {
                Ok(doc) => doc,
                Err(error) => {
                    warn!(%url, %error, "listing candidate failed, trying next");
                    continue;
                }
            };
            fetched_any = true;
            let items = listing::dedup_by_url(listing::extract_listing(&doc, &self.origin));
            if items.is_empty() {
                debug!(%url, "candidate document had no usable items");
                continue;
            }
            // Continuation is judged against the document that produced the
            // non-empty result.
            let has_more = pagination::has_next_page(&doc);
            return Ok(ListingPage { items, has_more });
        }
        if fetched_any {
            Ok(ListingPage {
                items: Vec::new(),
                has_more: false,
            })
        } else {
            Err(Error::AllCandidatesFailed { what })
        }
    }

    async fn fetch_document(&self, url: &str, headers: &[(&str, &str)]) -> Result<Document> {
        let html = self.fetcher.fetch(url, headers).await?;
        Ok(dom::parse(&html))
    }

    /// Archive pages for a 1-based page number, ordered variants first and
    /// the plain archive as the terminal candidate.
    fn archive_candidates(&self, page: u32, orders: &[&str]) -> Vec<String> {
        let base = if page <= 1 {
            format!("{}/manga/", self.origin)
        } else {
            format!("{}/manga/page/{page}/", self.origin)
        };
        let mut candidates: Vec<String> = orders
            .iter()
            .map(|order| format!("{base}?m_orderby={order}"))
            .collect();
        candidates.push(base);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverFetch;

    #[async_trait::async_trait]
    impl Fetcher for NeverFetch {
        async fn fetch(&self, url: &str, _headers: &[(&str, &str)]) -> Result<String> {
            Err(Error::Transport {
                url: url.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    #[test]
    fn origin_is_normalized() {
        let source = Source::with_origin(NeverFetch, "https://mirror.example/");
        assert_eq!(source.origin(), "https://mirror.example");
    }

    #[test]
    fn archive_candidates_paginate_in_path() {
        let source = Source::new(NeverFetch);
        let urls = source.archive_candidates(2, &["trending", "views"]);
        assert_eq!(
            urls,
            [
                "https://toonclan.com/manga/page/2/?m_orderby=trending",
                "https://toonclan.com/manga/page/2/?m_orderby=views",
                "https://toonclan.com/manga/page/2/",
            ]
        );
        let first = source.archive_candidates(1, &["latest"]);
        assert_eq!(first[0], "https://toonclan.com/manga/?m_orderby=latest");
    }

    #[test]
    fn filter_catalog_is_static() {
        let filters = Source::<NeverFetch>::list_filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].key, "m_orderby");
        assert!(filters[0].options.iter().any(|o| o.value == "latest"));
    }

    #[tokio::test]
    async fn exhausted_candidates_fail_the_operation() {
        let source = Source::new(NeverFetch);
        let result = source.list_popular(1).await;
        assert!(matches!(
            result,
            Err(Error::AllCandidatesFailed { what: "popular listing" })
        ));
    }
}
