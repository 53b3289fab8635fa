//! Response shape of the Youdao open translation API (`doctype=json`).
//!
//! ```json
//! {"translation": ["你好"], "query": "hello", "errorCode": 0}
//! ```
//!
//! `errorCode` is `0` on success; other values (20 text too long, 50 invalid
//! key, ...) come with no `translation` array.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YoudaoResponse {
    #[serde(rename = "errorCode", default)]
    pub error_code: i64,

    #[serde(default)]
    pub translation: Vec<String>,
}
