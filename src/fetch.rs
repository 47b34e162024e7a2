//! Fetch collaborator seam.
//!
//! The engine never talks to the network itself. Callers supply a [`Fetcher`]
//! implementation (HTTP client, cache, test fixture) and the engine awaits it
//! at each candidate URL. Cancellation and timeouts belong to the
//! implementation, not to this crate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Retrieves raw markup text for a URL.
///
/// A non-success status or network failure must surface as
/// [`Error::Transport`](crate::Error::Transport) so candidate fallback can
/// advance to the next URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` with the given request headers and return the response body.
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}

/// A shared fetcher fetches through the inner implementation, so one client
/// can back several engines (or an engine plus its test harness).
#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        (**self).fetch(url, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned;

    #[async_trait]
    impl Fetcher for Canned {
        async fn fetch(&self, url: &str, _headers: &[(&str, &str)]) -> Result<String> {
            Ok(format!("<html>{url}</html>"))
        }
    }

    #[tokio::test]
    async fn shared_fetcher_delegates_to_inner() {
        let shared = Arc::new(Canned);
        let body = shared.fetch("https://toonclan.com/", &[]).await;
        assert_eq!(
            body.ok().as_deref(),
            Some("<html>https://toonclan.com/</html>")
        );
    }
}
