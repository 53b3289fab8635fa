//! HTTP client for Walmart review-listing pages.

mod collect;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Fetches review-listing markup.
///
/// Every request is attempted exactly once. Network failures surface as
/// [`ScraperError::Connection`] and non-2xx responses as
/// [`ScraperError::UnexpectedStatus`]; callers decide whether a failure is
/// fatal.
pub struct ReviewClient {
    client: Client,
    /// Pause between consecutive page requests of one product.
    inter_request_delay_ms: u64,
}

impl ReviewClient {
    /// Creates a `ReviewClient` with a request timeout, a 10 second connect
    /// timeout, and the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        inter_request_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            inter_request_delay_ms,
        })
    }

    /// Fetches the raw markup of `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Connection`]: network, TLS, or timeout failure, or
    ///   the body could not be read.
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status. The body is
    ///   discarded.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|source| ScraperError::Connection {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ScraperError::Connection {
                url: url.to_owned(),
                source,
            })
    }
}
