use crate::app_config::{AppConfig, MalformedReviewPolicy};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub const DEFAULT_YOUDAO_URL: &str = "http://fanyi.youdao.com/openapi.do";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; parsing is decoupled from the real environment
/// so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("REVIEWCRAWL_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("REVIEWCRAWL_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "REVIEWCRAWL_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let user_agent = or_default("REVIEWCRAWL_USER_AGENT", DEFAULT_USER_AGENT);
    let inter_request_delay_ms = parse_u64("REVIEWCRAWL_INTER_REQUEST_DELAY_MS", "250")?;
    let fallback_page_count = parse_u32("REVIEWCRAWL_FALLBACK_PAGE_COUNT", "1")?;
    let malformed_review_policy = or_default("REVIEWCRAWL_MALFORMED_REVIEW_POLICY", "skip")
        .parse::<MalformedReviewPolicy>()
        .map_err(|reason| invalid("REVIEWCRAWL_MALFORMED_REVIEW_POLICY", reason))?;
    let max_concurrent_products = parse_usize("REVIEWCRAWL_MAX_CONCURRENT_PRODUCTS", "1")?.max(1);
    let default_link = optional("REVIEWCRAWL_DEFAULT_LINK");
    let output_file = PathBuf::from(or_default("REVIEWCRAWL_OUTPUT_FILE", "reviews.xlsx"));
    let youdao_url = or_default("REVIEWCRAWL_YOUDAO_URL", DEFAULT_YOUDAO_URL);
    let youdao_key = optional("REVIEWCRAWL_YOUDAO_KEY");
    let youdao_keyfrom = optional("REVIEWCRAWL_YOUDAO_KEYFROM");
    let translate_interval_ms = parse_u64("REVIEWCRAWL_TRANSLATE_INTERVAL_MS", "1000")?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        fallback_page_count,
        malformed_review_policy,
        max_concurrent_products,
        default_link,
        output_file,
        youdao_url,
        youdao_key,
        youdao_keyfrom,
        translate_interval_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
