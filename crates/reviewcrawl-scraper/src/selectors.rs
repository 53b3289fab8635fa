//! CSS selectors for Walmart review-listing markup.
//!
//! Every selector here is a contract with the live site. When parsing starts
//! coming back empty, capture a fresh page, update the selector, and extend
//! the fixtures in `parse_test.rs`.

use std::sync::LazyLock;

use scraper::Selector;

pub(crate) const REVIEW_SUMMARY: &str = ".heading-e";
pub(crate) const PRODUCT_NAME: &str = ".review-product-name";
pub(crate) const REVIEW_LIST: &str = "div.js-review-list";
pub(crate) const REVIEW_BLOCK: &str = "div.customer-review-body";
pub(crate) const CUSTOMER_NAME: &str = "h3.visuallyhidden";
pub(crate) const REVIEW_DATE: &str = "span.customer-review-date";
pub(crate) const REVIEW_TITLE: &str = "div.customer-review-title";
pub(crate) const STAR_RATING: &str = ".customer-stars > .visuallyhidden";
pub(crate) const REVIEW_TEXT: &str = ".customer-review-text";

fn compile(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid review-page selector")
}

pub(crate) static REVIEW_SUMMARY_SEL: LazyLock<Selector> =
    LazyLock::new(|| compile(REVIEW_SUMMARY));
pub(crate) static PRODUCT_NAME_SEL: LazyLock<Selector> = LazyLock::new(|| compile(PRODUCT_NAME));
pub(crate) static REVIEW_LIST_SEL: LazyLock<Selector> = LazyLock::new(|| compile(REVIEW_LIST));
pub(crate) static REVIEW_BLOCK_SEL: LazyLock<Selector> = LazyLock::new(|| compile(REVIEW_BLOCK));
pub(crate) static CUSTOMER_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| compile(CUSTOMER_NAME));
pub(crate) static REVIEW_DATE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(REVIEW_DATE));
pub(crate) static REVIEW_TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(REVIEW_TITLE));
pub(crate) static STAR_RATING_SEL: LazyLock<Selector> = LazyLock::new(|| compile(STAR_RATING));
pub(crate) static REVIEW_TEXT_SEL: LazyLock<Selector> = LazyLock::new(|| compile(REVIEW_TEXT));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selectors_compile() {
        for css in [
            REVIEW_SUMMARY,
            PRODUCT_NAME,
            REVIEW_LIST,
            REVIEW_BLOCK,
            CUSTOMER_NAME,
            REVIEW_DATE,
            REVIEW_TITLE,
            STAR_RATING,
            REVIEW_TEXT,
        ] {
            assert!(Selector::parse(css).is_ok(), "selector {css} should parse");
        }
    }
}
