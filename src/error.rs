//! Error types for toonscrape.
//!
//! Only transport-level problems are errors. A field locator chain that finds
//! nothing is an extraction miss (None/empty), and URL normalization always
//! returns a best-effort string; neither is represented here.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fetch did not succeed (non-success status or network failure).
    #[error("transport failure fetching {url}: {reason}")]
    Transport {
        /// The URL that failed to fetch.
        url: String,
        /// Human-readable failure reason from the transport layer.
        reason: String,
    },

    /// Every candidate URL for an operation failed to fetch.
    #[error("could not fetch any {what} candidate")]
    AllCandidatesFailed {
        /// The operation whose candidates were exhausted.
        what: &'static str,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
