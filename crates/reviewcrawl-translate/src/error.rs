use thiserror::Error;

/// Failures talking to the translation API.
///
/// These never escape [`crate::YoudaoTranslator::translate`], which logs them
/// and substitutes an empty string.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid translation API URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unexpected HTTP status {status} from translation API")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for translation response: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("translation API returned error code {code}")]
    Api { code: i64 },

    #[error("translation response carried no translation")]
    MissingTranslation,
}
