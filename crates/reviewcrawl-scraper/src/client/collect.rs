//! Multi-page review collection for `ReviewClient`.

use std::time::Duration;

use reviewcrawl_core::{MalformedReviewPolicy, ReviewRecord};

use crate::pagination::page_url;
use crate::parse::parse_reviews;

use super::ReviewClient;

impl ReviewClient {
    /// Collects the reviews on pages `1..=page_count` of a product's review
    /// listing.
    ///
    /// Exactly `page_count` pages are requested, in order, even when earlier
    /// pages come back empty. A page that fails to fetch or parse is logged
    /// and skipped; the remaining pages are still crawled.
    ///
    /// Records are returned in page order, then in on-page order.
    pub async fn collect_reviews(
        &self,
        product_url: &str,
        page_count: u32,
        policy: MalformedReviewPolicy,
    ) -> Vec<ReviewRecord> {
        let mut records: Vec<ReviewRecord> = Vec::new();
        let mut failed_pages = 0u32;

        for page in 1..=page_count {
            if page > 1 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            let url = page_url(product_url, page);
            tracing::info!(page, page_count, url = %url, "fetching review page");

            let markup = match self.fetch_page(&url).await {
                Ok(markup) => markup,
                Err(e) => {
                    failed_pages += 1;
                    tracing::warn!(page, url = %url, error = %e, "review page fetch failed; skipping");
                    continue;
                }
            };

            match parse_reviews(&markup, policy) {
                Ok(page_records) if page_records.is_empty() => {
                    tracing::info!(page, url = %url, "no reviews found on page");
                }
                Ok(page_records) => {
                    let first = records.len() + 1;
                    records.extend(page_records);
                    tracing::info!(
                        page,
                        first_review = first,
                        last_review = records.len(),
                        "extracted reviews"
                    );
                }
                Err(e) => {
                    failed_pages += 1;
                    tracing::warn!(page, url = %url, error = %e, "review page discarded");
                }
            }
        }

        if failed_pages > 0 {
            tracing::warn!(
                product_url,
                failed_pages,
                page_count,
                "some review pages could not be collected"
            );
        }

        records
    }
}
