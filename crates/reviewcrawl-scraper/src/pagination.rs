//! Review-listing page URLs.
//!
//! The first page is the product's review URL as given. Every later page
//! appends a fixed query string:
//!
//! ```text
//! https://www.walmart.com/reviews/product/47055697?limit=20&page=3&sort=relevancy
//! ```
//!
//! The site serves 20 reviews per page; that figure is also what page-count
//! estimation divides by.

/// Reviews the site renders on one listing page.
pub const REVIEWS_PER_PAGE: u32 = 20;

const SORT_ORDER: &str = "relevancy";

/// Builds the URL of review page `page` (1-based) for `base`.
///
/// Page 1 (and page 0, which callers never request) is `base` unchanged.
#[must_use]
pub fn page_url(base: &str, page: u32) -> String {
    if page <= 1 {
        return base.to_owned();
    }
    format!("{base}?limit={REVIEWS_PER_PAGE}&page={page}&sort={SORT_ORDER}")
}
