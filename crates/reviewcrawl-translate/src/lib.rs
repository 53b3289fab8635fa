pub mod chunk;
pub mod client;
pub mod error;
mod throttle;
pub mod types;

pub use chunk::{char_chunks, MAX_CHUNK_CHARS};
pub use client::YoudaoTranslator;
pub use error::TranslateError;
