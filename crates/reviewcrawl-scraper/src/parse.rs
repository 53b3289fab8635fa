//! Extraction of review records, product names, and page counts from review
//! listing markup.

use std::sync::LazyLock;

use regex::Regex;
use reviewcrawl_core::{MalformedReviewPolicy, ReviewRecord};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::pagination::REVIEWS_PER_PAGE;
use crate::selectors;

/// Boilerplate the visually hidden reviewer heading places before the name,
/// e.g. `"Customer review by Frank"`.
pub const CUSTOMER_NAME_PREFIX: &str = "Customer review by ";

/// Number of leading characters of the hidden star-rating text that make up
/// the rating, e.g. `"4.0"` from `"4.0 out of 5 stars"`.
const STARS_LEN: usize = 3;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit-run regex"));

/// Estimates the number of review pages from the review-count summary.
///
/// The first run of digits in the summary text is read as the total review
/// count; the page count is `total / 20 + 1`. When the summary has no digits
/// the product is assumed to fit on one page.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] if the summary element is absent.
pub fn estimate_page_count(markup: &str) -> Result<u32, ScraperError> {
    let document = Html::parse_document(markup);
    let summary = document
        .select(&selectors::REVIEW_SUMMARY_SEL)
        .next()
        .ok_or(ScraperError::MissingElement {
            selector: selectors::REVIEW_SUMMARY,
            context: "review count summary",
        })?;

    let text = element_text(summary);
    let Some(digits) = DIGIT_RUN.find(&text) else {
        tracing::debug!(summary = %text.trim(), "no review count in summary; assuming one page");
        return Ok(1);
    };

    // A run too long for u64 is not a real review count; saturate instead of failing.
    let total_reviews = digits.as_str().parse::<u64>().unwrap_or(u64::MAX);
    let pages = total_reviews / u64::from(REVIEWS_PER_PAGE) + 1;
    Ok(u32::try_from(pages).unwrap_or(u32::MAX))
}

/// Extracts the product display name shown above the review listing.
///
/// # Errors
///
/// Returns [`ScraperError::MissingElement`] if the product-name element is absent.
pub fn extract_product_name(markup: &str) -> Result<String, ScraperError> {
    let document = Html::parse_document(markup);
    document
        .select(&selectors::PRODUCT_NAME_SEL)
        .next()
        .map(|el| element_text(el).trim().to_owned())
        .ok_or(ScraperError::MissingElement {
            selector: selectors::PRODUCT_NAME,
            context: "product name",
        })
}

/// Parses every review on one listing page, in on-page order.
///
/// A page without a review list yields an empty `Vec`; pagination regularly
/// runs past the last populated page. Review blocks missing a field are
/// handled according to `policy`.
///
/// # Errors
///
/// Returns [`ScraperError::FieldExtraction`] for the first malformed review
/// when `policy` is [`MalformedReviewPolicy::AbortPage`]. Never errors under
/// [`MalformedReviewPolicy::Skip`].
pub fn parse_reviews(
    markup: &str,
    policy: MalformedReviewPolicy,
) -> Result<Vec<ReviewRecord>, ScraperError> {
    let document = Html::parse_document(markup);
    let Some(list) = document.select(&selectors::REVIEW_LIST_SEL).next() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for (offset, block) in list.select(&selectors::REVIEW_BLOCK_SEL).enumerate() {
        let index = offset + 1;
        match parse_review_block(block, index) {
            Ok(record) => records.push(record),
            Err(err) => match policy {
                MalformedReviewPolicy::Skip => {
                    tracing::warn!(index, error = %err, "skipping malformed review");
                }
                MalformedReviewPolicy::AbortPage => return Err(err),
            },
        }
    }

    Ok(records)
}

fn parse_review_block(block: ElementRef<'_>, index: usize) -> Result<ReviewRecord, ScraperError> {
    let field = |selector: &Selector, field: &'static str| -> Result<String, ScraperError> {
        block
            .select(selector)
            .next()
            .map(element_text)
            .ok_or(ScraperError::FieldExtraction { index, field })
    };

    let heading = field(&selectors::CUSTOMER_NAME_SEL, "customer name")?;
    let date = field(&selectors::REVIEW_DATE_SEL, "date")?;
    let title = field(&selectors::REVIEW_TITLE_SEL, "title")?;
    let rating = field(&selectors::STAR_RATING_SEL, "star rating")?;
    let content = field(&selectors::REVIEW_TEXT_SEL, "review text")?;

    Ok(ReviewRecord::new(
        strip_customer_prefix(&heading),
        date,
        rating.trim().chars().take(STARS_LEN).collect::<String>(),
        title,
        content.trim(),
    ))
}

/// Removes [`CUSTOMER_NAME_PREFIX`] from a reviewer heading. A heading that
/// is only the prefix yields an empty name. Headings that do not carry the
/// prefix are returned trimmed but otherwise untouched.
pub(crate) fn strip_customer_prefix(heading: &str) -> String {
    let trimmed = heading.trim();
    if trimmed == CUSTOMER_NAME_PREFIX.trim_end() {
        return String::new();
    }
    trimmed
        .strip_prefix(CUSTOMER_NAME_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_owned()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
