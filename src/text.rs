//! Text cleaning helpers.
//!
//! Extracted text nodes arrive with template indentation and label prefixes
//! baked in; everything user-visible passes through [`clean`] first.

#![allow(clippy::expect_used)] // patterns are compiled once and known-valid

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE regex")
});

static AUTHOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^by[:\s]\s*").expect("AUTHOR_PREFIX regex")
});

static AUTHOR_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:authors?|artists?)\s*(?:\(s\))?\s*:?\s*").expect("AUTHOR_LABEL regex")
});

static STATUS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^status\s*:?\s*").expect("STATUS_LABEL regex")
});

static GENRE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:genres?|categor(?:y|ies)|tags?)\s*(?:\(s\))?\s*:?\s*")
        .expect("GENRE_LABEL regex")
});

/// Collapse all whitespace runs to single spaces and trim.
#[must_use]
pub fn clean(raw: &str) -> String {
    WHITESPACE.replace_all(raw, " ").trim().to_string()
}

/// Strip a leading "by" prefix (case-insensitive) from an author credit.
#[must_use]
pub fn strip_author_prefix(text: &str) -> String {
    AUTHOR_PREFIX.replace(text.trim(), "").trim().to_string()
}

/// Strip a leading "Author(s)"/"Artist(s)" metadata label.
#[must_use]
pub fn strip_author_label(text: &str) -> String {
    AUTHOR_LABEL.replace(text.trim(), "").trim().to_string()
}

/// Strip a leading "Status" metadata label.
#[must_use]
pub fn strip_status_label(text: &str) -> String {
    STATUS_LABEL.replace(text.trim(), "").trim().to_string()
}

/// Strip a leading "Genre(s)"/"Category" metadata label.
#[must_use]
pub fn strip_genre_label(text: &str) -> String {
    GENRE_LABEL.replace(text.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean("  a \n\t b  "), "a b");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn author_prefix_is_stripped() {
        assert_eq!(strip_author_prefix("by Jin Park"), "Jin Park");
        assert_eq!(strip_author_prefix("By: Jin Park"), "Jin Park");
        assert_eq!(strip_author_prefix("BY  Jin Park"), "Jin Park");
    }

    #[test]
    fn author_prefix_does_not_eat_names() {
        assert_eq!(strip_author_prefix("Byron Kim"), "Byron Kim");
    }

    #[test]
    fn metadata_labels_are_stripped() {
        assert_eq!(strip_author_label("Author(s): Jin Park"), "Jin Park");
        assert_eq!(strip_author_label("Artist : Jin Park"), "Jin Park");
        assert_eq!(strip_status_label("Status: OnGoing"), "OnGoing");
        assert_eq!(strip_genre_label("Genre(s): Action, Fantasy"), "Action, Fantasy");
        assert_eq!(strip_genre_label("Categories - none"), "- none");
    }
}
