pub mod app_config;
pub mod config;
pub mod error;
pub mod reviews;

pub use app_config::{AppConfig, MalformedReviewPolicy, YoudaoCredentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use reviews::{ProductJob, ReviewRecord};
