//! Multi-product crawl orchestration.
//!
//! Each input URL becomes one [`ProductJob`]. A product's name and page count
//! come from a single fetch of its review URL; the pages are then collected
//! through [`ReviewClient::collect_reviews`]. Products may run concurrently,
//! but jobs always come back in input order.

use futures::stream::{self, StreamExt};
use reviewcrawl_core::{AppConfig, MalformedReviewPolicy, ProductJob};
use reviewcrawl_scraper::{estimate_page_count, extract_product_name, ReviewClient};
use reviewcrawl_translate::YoudaoTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CrawlOptions {
    /// Crawl exactly this many pages per product instead of estimating.
    pub page_override: Option<u32>,
    /// Page count used when estimation fails. `0` skips the product.
    pub fallback_page_count: u32,
    pub policy: MalformedReviewPolicy,
    pub max_concurrent: usize,
}

impl CrawlOptions {
    pub(crate) fn from_config(config: &AppConfig, page_override: Option<u32>) -> Self {
        Self {
            page_override,
            fallback_page_count: config.fallback_page_count,
            policy: config.malformed_review_policy,
            max_concurrent: config.max_concurrent_products.max(1),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CrawlReport {
    /// One job per input URL, in input order.
    pub jobs: Vec<ProductJob>,
}

impl CrawlReport {
    pub(crate) fn total_reviews(&self) -> usize {
        self.jobs.iter().map(ProductJob::review_count).sum()
    }

    pub(crate) fn empty_products(&self) -> usize {
        self.jobs.iter().filter(|job| job.is_empty()).count()
    }

    /// True when not a single review was collected across all products.
    pub(crate) fn is_total_failure(&self) -> bool {
        self.jobs.iter().all(ProductJob::is_empty)
    }
}

/// Crawls every URL and returns the jobs in input order.
pub(crate) async fn run(client: &ReviewClient, urls: &[String], options: &CrawlOptions) -> CrawlReport {
    let max_concurrent = options.max_concurrent.max(1);
    tracing::info!(products = urls.len(), max_concurrent, "starting review crawl");

    let jobs: Vec<ProductJob> = stream::iter(urls.iter().enumerate())
        .map(|(index, url)| crawl_product(client, url, index + 1, options))
        .buffered(max_concurrent)
        .collect()
        .await;

    let report = CrawlReport { jobs };
    let failed = report.empty_products();
    if failed > 0 {
        tracing::warn!(
            failed_products = failed,
            total_products = urls.len(),
            "some products yielded no reviews"
        );
    }
    report
}

async fn crawl_product(
    client: &ReviewClient,
    url: &str,
    position: usize,
    options: &CrawlOptions,
) -> ProductJob {
    let summary = match client.fetch_page(url).await {
        Ok(markup) => Some(markup),
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to fetch review summary");
            None
        }
    };

    let product_name = summary
        .as_deref()
        .and_then(|markup| match extract_product_name(markup) {
            Ok(name) if !name.is_empty() => Some(name),
            Ok(_) => {
                tracing::warn!(url, "product name is empty");
                None
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "could not read product name");
                None
            }
        })
        .unwrap_or_else(|| format!("Product {position}"));

    let page_count = match options.page_override {
        Some(pages) => pages,
        None => summary
            .as_deref()
            .and_then(|markup| match estimate_page_count(markup) {
                Ok(pages) => Some(pages),
                Err(e) => {
                    tracing::warn!(url, error = %e, "could not estimate page count");
                    None
                }
            })
            .unwrap_or_else(|| {
                tracing::warn!(
                    url,
                    fallback = options.fallback_page_count,
                    "using fallback page count"
                );
                options.fallback_page_count
            }),
    };

    let mut job = ProductJob::new(url, product_name);
    if page_count == 0 {
        tracing::warn!(url, product = %job.product_name, "no pages to crawl; skipping product");
        return job;
    }

    tracing::info!(url, product = %job.product_name, page_count, "crawling product");
    job.records = client.collect_reviews(url, page_count, options.policy).await;
    job.page_count = page_count;
    tracing::info!(
        product = %job.product_name,
        reviews = job.review_count(),
        "product finished"
    );
    job
}

/// Replaces every record in `report` with its translated form, one record at
/// a time.
pub(crate) async fn translate_report(translator: &YoudaoTranslator, report: &mut CrawlReport) {
    let total = report.total_reviews();
    let mut done = 0usize;
    for job in &mut report.jobs {
        let records = std::mem::take(&mut job.records);
        for record in records {
            job.records.push(translator.translate_record(record).await);
            done += 1;
            tracing::info!(done, total, product = %job.product_name, "review translated");
        }
    }
}

#[cfg(test)]
#[path = "crawl_test.rs"]
mod tests;
