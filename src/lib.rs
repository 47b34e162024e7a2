//! # toonscrape
//!
//! Resilient extraction engine for a Madara-style webtoon reading site.
//!
//! The site's markup is inconsistent across pages and changes over time
//! without notice, so every data point has multiple candidate locations,
//! tried in priority order, with the first structurally-plausible match
//! accepted. Network transport is an external collaborator behind the
//! [`Fetcher`] trait; this crate turns fetched markup into the structured
//! records a reading application consumes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use toonscrape::{Fetcher, Source, Result};
//!
//! # async fn run(client: impl Fetcher) -> Result<()> {
//! let source = Source::new(client);
//! let popular = source.list_popular(1).await?;
//! for work in &popular.items {
//!     println!("{} -> {}", work.name, work.url);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod model;
mod source;

/// DOM operations adapter over the underlying tree representation.
pub mod dom;

/// Field locator: the shared fallback-chain runner.
pub mod locator;

/// Site heuristics: selector chains as data, most specific first.
pub mod selectors;

/// Listing page extraction (popular/latest/search results).
pub mod listing;

/// Detail page extraction (one work's full record).
pub mod detail;

/// Tiered chapter-list discovery.
pub mod chapters;

/// Chapter body isolation and sanitization.
pub mod content;

/// Pagination detection.
pub mod pagination;

/// Text cleaning helpers.
pub mod text;

/// URL resolution and image normalization.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::Fetcher;
pub use model::{
    ChapterContent, ChapterRef, Filter, FilterOption, ListingPage, WorkDetail, WorkStatus,
    WorkSummary,
};
pub use source::{Source, SITE_ORIGIN};
