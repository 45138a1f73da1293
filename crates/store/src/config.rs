//! Store configuration

use crate::errors::{CacheError, RecoveryHint, Result};
use polycache_core::{
    POLYCACHE_DEFAULT_TTL_VAR, POLYCACHE_KEY_PREFIX_VAR, POLYCACHE_MISS_ON_CORRUPT_VAR,
};
use std::time::Duration;
use tracing::debug;

/// Configuration for a [`TypedCache`](crate::TypedCache)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prefix prepended to every key before it reaches the store
    pub key_prefix: String,
    /// Expiry applied by `put` when no explicit TTL is given
    pub default_ttl: Option<Duration>,
    /// Report unreadable stored values as misses instead of errors
    pub miss_on_corrupt: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            default_ttl: None,
            miss_on_corrupt: true,
        }
    }
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(prefix) = std::env::var(POLYCACHE_KEY_PREFIX_VAR) {
            config.key_prefix = prefix;
        }

        if let Ok(ttl_str) = std::env::var(POLYCACHE_DEFAULT_TTL_VAR) {
            let secs = ttl_str.trim().parse::<u64>().map_err(|e| CacheError::Configuration {
                message: format!("{POLYCACHE_DEFAULT_TTL_VAR} must be a whole number of seconds: {e}"),
                recovery_hint: RecoveryHint::UpdateConfiguration,
            })?;
            // zero disables expiry
            config.default_ttl = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Ok(miss_str) = std::env::var(POLYCACHE_MISS_ON_CORRUPT_VAR) {
            config.miss_on_corrupt = miss_str.trim().to_lowercase() == "true";
        }

        debug!(
            key_prefix = %config.key_prefix,
            default_ttl = ?config.default_ttl,
            miss_on_corrupt = config.miss_on_corrupt,
            "loaded store configuration from environment"
        );
        Ok(config)
    }

    /// Key as stored, with the configured prefix applied
    pub(crate) fn qualify(&self, key: &str) -> String {
        format!("{}{key}", self.key_prefix)
    }

    /// Glob pattern as matched by the store; the prefix matches literally
    pub(crate) fn qualify_pattern(&self, pattern: &str) -> String {
        format!("{}{pattern}", globset::escape(&self.key_prefix))
    }
}

/// Builder for creating store configurations
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.key_prefix = prefix.into();
        self
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.config.default_ttl = Some(ttl);
        self
    }

    pub fn with_miss_on_corrupt(mut self, enabled: bool) -> Self {
        self.config.miss_on_corrupt = enabled;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}

impl Default for StoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
