//! HTTP client for the Youdao open translation API.
//!
//! Translation is best-effort: [`YoudaoTranslator::translate`] never fails.
//! Any transport, status, or decoding problem is logged and the affected
//! chunk contributes an empty string.

use std::time::Duration;

use reqwest::{Client, Url};
use reviewcrawl_core::{ReviewRecord, YoudaoCredentials};

use crate::chunk::{char_chunks, MAX_CHUNK_CHARS};
use crate::error::TranslateError;
use crate::throttle::Throttle;
use crate::types::YoudaoResponse;

pub struct YoudaoTranslator {
    client: Client,
    base_url: Url,
    credentials: YoudaoCredentials,
    throttle: Throttle,
}

impl YoudaoTranslator {
    /// Creates a translator for the API at `base_url`.
    ///
    /// `min_interval_ms` is the minimum idle time between one API call
    /// finishing and the next one starting, chunks of one text included.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidBaseUrl`] if `base_url` does not
    /// parse, or [`TranslateError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        credentials: YoudaoCredentials,
        timeout_secs: u64,
        min_interval_ms: u64,
    ) -> Result<Self, TranslateError> {
        let base_url = Url::parse(base_url).map_err(|e| TranslateError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url,
            credentials,
            throttle: Throttle::new(Duration::from_millis(min_interval_ms)),
        })
    }

    /// Translates `text`, splitting it into chunks of at most
    /// [`MAX_CHUNK_CHARS`] characters that are translated one after another
    /// and joined in order.
    ///
    /// Returns an empty string for empty input without calling the API. A
    /// chunk whose translation fails contributes an empty string.
    pub async fn translate(&self, text: &str) -> String {
        let mut translated = String::new();
        for (index, chunk) in char_chunks(text, MAX_CHUNK_CHARS).enumerate() {
            match self.translate_chunk(chunk).await {
                Ok(piece) => translated.push_str(&piece),
                Err(e) => {
                    tracing::warn!(chunk = index, error = %e, "translation failed; leaving chunk empty");
                }
            }
        }
        translated
    }

    /// Returns `record` with its title and content translated.
    pub async fn translate_record(&self, record: ReviewRecord) -> ReviewRecord {
        let trans_title = self.translate(&record.title).await;
        let trans_content = self.translate(&record.content).await;
        record.with_translation(trans_title, trans_content)
    }

    /// Translates a single API-sized chunk.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::Http`]: network or TLS failure.
    /// - [`TranslateError::UnexpectedStatus`]: any non-2xx status.
    /// - [`TranslateError::Deserialize`]: the body is not the expected JSON.
    /// - [`TranslateError::Api`]: the API reported a non-zero error code.
    /// - [`TranslateError::MissingTranslation`]: success without a result.
    pub async fn translate_chunk(&self, chunk: &str) -> Result<String, TranslateError> {
        let _permit = self.throttle.wait().await;

        let url = self.request_url(chunk);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: YoudaoResponse =
            serde_json::from_str(&body).map_err(|source| TranslateError::Deserialize { source })?;

        if parsed.error_code != 0 {
            return Err(TranslateError::Api {
                code: parsed.error_code,
            });
        }

        parsed
            .translation
            .into_iter()
            .next()
            .ok_or(TranslateError::MissingTranslation)
    }

    fn request_url(&self, chunk: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("keyfrom", &self.credentials.keyfrom)
            .append_pair("key", &self.credentials.key)
            .append_pair("type", "data")
            .append_pair("doctype", "json")
            .append_pair("version", "1.1")
            .append_pair("q", chunk);
        url
    }
}
