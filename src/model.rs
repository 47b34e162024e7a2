//! Data model for extracted site data.
//!
//! Every `url` field is absolute and origin-qualified before a value leaves
//! any component. `genres` and `chapters` are never null, always a (possibly
//! empty) sequence. Values are immutable after construction; re-extraction
//! produces a new value.

use serde::{Deserialize, Serialize};

/// Publication status of a work, mapped from free-form site text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStatus {
    /// Actively releasing chapters.
    Ongoing,
    /// Finished and fully released.
    Completed,
    /// Paused by the author/publisher.
    Hiatus,
    /// Dropped before completion.
    Cancelled,
    /// Source publication ended but releases may continue.
    PublishingFinished,
    /// Status text absent or unrecognized.
    #[default]
    Unknown,
}

impl WorkStatus {
    /// Classify free-form status text into the closed status set.
    ///
    /// Matching is substring-based and case-insensitive. The literal phrase
    /// "publishing finished" is tested before the bare Completed-family terms,
    /// otherwise the "finished" substring would shadow it.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Unknown;
        };
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Self::Unknown;
        }
        if label.contains("publishing finished") {
            return Self::PublishingFinished;
        }
        if ["ongoing", "updating", "serial"]
            .iter()
            .any(|t| label.contains(t))
        {
            return Self::Ongoing;
        }
        if ["completed", "complete", "finished"]
            .iter()
            .any(|t| label.contains(t))
        {
            return Self::Completed;
        }
        if label.contains("hiatus") {
            return Self::Hiatus;
        }
        if label.contains("cancel") {
            return Self::Cancelled;
        }
        Self::Unknown
    }
}

/// One entry on a listing page (popular/latest/search results).
///
/// The absolute `url` is the natural identifier; the site exposes no stable
/// numeric ID, so deduplication keys on the normalized URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Display title.
    pub name: String,
    /// Absolute URL of the work's detail page.
    pub url: String,
    /// Absolute, normalized cover image URL.
    pub cover: Option<String>,
    /// Author name, stripped of any leading "by".
    pub author: Option<String>,
    /// Short summary/excerpt text.
    pub summary: Option<String>,
    /// Raw publication/update date text as shown by the site.
    pub published_at: Option<String>,
}

/// Full record for one work, assembled from its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDetail {
    /// Display title.
    pub title: String,
    /// Absolute URL of the detail page.
    pub url: String,
    /// Absolute, normalized cover image URL.
    pub cover: Option<String>,
    /// Summary/description text (empty string when absent).
    pub description: String,
    /// Author name (empty string when absent).
    pub author: String,
    /// Genre tags in document order.
    pub genres: Vec<String>,
    /// Closed-set publication status.
    pub status: WorkStatus,
    /// Chapters in source document order (never re-sorted here).
    pub chapters: Vec<ChapterRef>,
}

/// Reference to one chapter of a work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    /// Chapter display name.
    pub name: String,
    /// Absolute URL of the chapter page.
    pub url: String,
    /// Raw upload-date text as shown by the site.
    pub uploaded_at: Option<String>,
}

/// Sanitized chapter body, produced per chapter fetch and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    /// Sanitized markup fragment ready for a downstream renderer.
    pub data: String,
    /// Absolute URL the fragment was extracted from.
    pub source_url: String,
}

/// One page of listing results plus a continuation signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Works in document order, deduplicated by absolute URL.
    pub items: Vec<WorkSummary>,
    /// Whether a next/older page exists.
    pub has_more: bool,
}

/// A filter the host application can offer for search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Display name.
    pub name: String,
    /// Query-string key the filter would map to.
    pub key: String,
    /// Available options.
    pub options: Vec<FilterOption>,
}

/// One selectable option of a [`Filter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Display label.
    pub label: String,
    /// Query-string value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_ongoing_variants() {
        assert_eq!(
            WorkStatus::from_label(Some("Currently Ongoing")),
            WorkStatus::Ongoing
        );
        assert_eq!(WorkStatus::from_label(Some("UPDATING")), WorkStatus::Ongoing);
        assert_eq!(
            WorkStatus::from_label(Some("In serialization")),
            WorkStatus::Ongoing
        );
    }

    #[test]
    fn classify_completed_variants() {
        assert_eq!(
            WorkStatus::from_label(Some("Completed!")),
            WorkStatus::Completed
        );
        assert_eq!(WorkStatus::from_label(Some("Complete")), WorkStatus::Completed);
        assert_eq!(WorkStatus::from_label(Some("Finished")), WorkStatus::Completed);
    }

    #[test]
    fn classify_publishing_finished_before_completed_family() {
        assert_eq!(
            WorkStatus::from_label(Some("Publishing Finished")),
            WorkStatus::PublishingFinished
        );
    }

    #[test]
    fn classify_hiatus_and_cancelled() {
        assert_eq!(WorkStatus::from_label(Some("On Hiatus")), WorkStatus::Hiatus);
        assert_eq!(
            WorkStatus::from_label(Some("Canceled")),
            WorkStatus::Cancelled
        );
        assert_eq!(
            WorkStatus::from_label(Some("Cancelled")),
            WorkStatus::Cancelled
        );
    }

    #[test]
    fn classify_unknown_on_empty_or_missing() {
        assert_eq!(WorkStatus::from_label(None), WorkStatus::Unknown);
        assert_eq!(WorkStatus::from_label(Some("")), WorkStatus::Unknown);
        assert_eq!(WorkStatus::from_label(Some("  ")), WorkStatus::Unknown);
        assert_eq!(WorkStatus::from_label(Some("licensed")), WorkStatus::Unknown);
    }

    #[test]
    fn work_detail_serializes() {
        let detail = WorkDetail {
            title: "Solo Grower".to_string(),
            url: "https://toonclan.com/manga/solo-grower/".to_string(),
            cover: None,
            description: String::new(),
            author: String::new(),
            genres: Vec::new(),
            status: WorkStatus::Unknown,
            chapters: Vec::new(),
        };
        let json = serde_json::to_string(&detail).unwrap_or_default();
        assert!(json.contains("\"status\":\"Unknown\""));
        assert!(json.contains("\"genres\":[]"));
    }
}
