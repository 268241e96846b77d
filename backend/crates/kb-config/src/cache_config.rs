use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_TTL_SECS: u64 = 3600;
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Read cache in front of the task API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// 0 keeps nothing; in-flight requests are still shared
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::cache(format!(
                "cache.ttl_secs must be 0-{}, got {}",
                MAX_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }

    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_secs)
    }
}
