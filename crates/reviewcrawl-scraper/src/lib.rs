pub mod client;
pub mod error;
pub mod pagination;
pub mod parse;
mod selectors;

pub use client::ReviewClient;
pub use error::ScraperError;
pub use pagination::{page_url, REVIEWS_PER_PAGE};
pub use parse::{estimate_page_count, extract_product_name, parse_reviews};
