//! Layered configuration for the `kb` tooling: defaults, `config.toml`, then `KB_*` overrides.

mod api_config;
mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;

pub const CONFIG_DIR_ENV: &str = "KB_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".kb";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
