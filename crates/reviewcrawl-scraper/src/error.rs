use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("{context} not found (selector `{selector}`)")]
    MissingElement {
        selector: &'static str,
        context: &'static str,
    },

    #[error("review #{index} is missing its {field}")]
    FieldExtraction { index: usize, field: &'static str },
}
