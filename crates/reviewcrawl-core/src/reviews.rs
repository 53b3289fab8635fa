use serde::{Deserialize, Serialize};

/// One customer review scraped from a product's review listing.
///
/// All fields are kept exactly as the page renders them; `date` is not
/// parsed and `stars` is the short rating text such as `"4.0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub customer_name: String,
    pub date: String,
    pub stars: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_content: Option<String>,
}

impl ReviewRecord {
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        date: impl Into<String>,
        stars: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            date: date.into(),
            stars: stars.into(),
            title: title.into(),
            content: content.into(),
            trans_title: None,
            trans_content: None,
        }
    }

    /// Returns a copy of this record carrying the translated title and content.
    #[must_use]
    pub fn with_translation(self, trans_title: String, trans_content: String) -> Self {
        Self {
            trans_title: Some(trans_title),
            trans_content: Some(trans_content),
            ..self
        }
    }

    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.trans_title.is_some() || self.trans_content.is_some()
    }
}

/// Accumulated result of crawling one product URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductJob {
    /// Review listing URL exactly as the user supplied it.
    pub source_url: String,
    pub product_name: String,
    /// Number of listing pages crawled. `0` when the product was skipped.
    pub page_count: u32,
    /// Records in page order, then in on-page order.
    pub records: Vec<ReviewRecord>,
}

impl ProductJob {
    #[must_use]
    pub fn new(source_url: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            product_name: product_name.into(),
            page_count: 0,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn review_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
