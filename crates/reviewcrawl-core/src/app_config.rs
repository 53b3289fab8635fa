use std::path::PathBuf;

use crate::ConfigError;

/// What the review parser does with a review block that is missing one of
/// its expected sub-elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedReviewPolicy {
    /// Log the malformed review and keep parsing the rest of the page.
    #[default]
    Skip,
    /// Discard the whole page as soon as one review is malformed.
    AbortPage,
}

impl std::fmt::Display for MalformedReviewPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReviewPolicy::Skip => write!(f, "skip"),
            MalformedReviewPolicy::AbortPage => write!(f, "abort-page"),
        }
    }
}

impl std::str::FromStr for MalformedReviewPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MalformedReviewPolicy::Skip),
            "abort-page" | "abort_page" | "abort" => Ok(MalformedReviewPolicy::AbortPage),
            other => Err(format!(
                "unknown policy \"{other}\" (expected \"skip\" or \"abort-page\")"
            )),
        }
    }
}

/// API credentials for the Youdao open translation endpoint.
#[derive(Clone)]
pub struct YoudaoCredentials {
    pub key: String,
    pub keyfrom: String,
}

impl std::fmt::Debug for YoudaoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoudaoCredentials")
            .field("key", &"[redacted]")
            .field("keyfrom", &self.keyfrom)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_request_delay_ms: u64,
    /// Page count used when the review-count summary cannot be read.
    /// `0` means the product is skipped instead.
    pub fallback_page_count: u32,
    pub malformed_review_policy: MalformedReviewPolicy,
    pub max_concurrent_products: usize,
    pub default_link: Option<String>,
    pub output_file: PathBuf,
    pub youdao_url: String,
    pub youdao_key: Option<String>,
    pub youdao_keyfrom: Option<String>,
    pub translate_interval_ms: u64,
}

impl AppConfig {
    /// Returns the Youdao credentials, or an error naming the first missing
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when either the key or the
    /// `keyfrom` value is unset.
    pub fn youdao_credentials(&self) -> Result<YoudaoCredentials, ConfigError> {
        let key = self
            .youdao_key
            .clone()
            .ok_or_else(|| ConfigError::MissingEnvVar("REVIEWCRAWL_YOUDAO_KEY".to_string()))?;
        let keyfrom = self.youdao_keyfrom.clone().ok_or_else(|| {
            ConfigError::MissingEnvVar("REVIEWCRAWL_YOUDAO_KEYFROM".to_string())
        })?;
        Ok(YoudaoCredentials { key, keyfrom })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("fallback_page_count", &self.fallback_page_count)
            .field("malformed_review_policy", &self.malformed_review_policy)
            .field("max_concurrent_products", &self.max_concurrent_products)
            .field("default_link", &self.default_link)
            .field("output_file", &self.output_file)
            .field("youdao_url", &self.youdao_url)
            .field("youdao_key", &self.youdao_key.as_ref().map(|_| "[redacted]"))
            .field("youdao_keyfrom", &self.youdao_keyfrom)
            .field("translate_interval_ms", &self.translate_interval_ms)
            .finish()
    }
}
