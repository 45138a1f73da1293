//! Codec configuration, fixed when a [`Codec`](crate::Codec) is built

use polycache_core::{
    Error, Result, DEFAULT_DISCRIMINATOR, POLYCACHE_DISCRIMINATOR_VAR, POLYCACHE_WRAPPER_ARRAYS_VAR,
};
use tracing::debug;

/// Wire-level settings shared by the encoder and decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Reserved field naming the concrete type of a tagged object
    pub discriminator: String,
    /// Write non-default collections as `[kindName, elements]` wrapper arrays
    pub emit_wrapper_arrays: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            discriminator: DEFAULT_DISCRIMINATOR.to_string(),
            emit_wrapper_arrays: false,
        }
    }
}

impl CodecConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(discriminator) = std::env::var(POLYCACHE_DISCRIMINATOR_VAR) {
            config.discriminator = discriminator;
        }

        if let Ok(wrapper_str) = std::env::var(POLYCACHE_WRAPPER_ARRAYS_VAR) {
            config.emit_wrapper_arrays = parse_flag(POLYCACHE_WRAPPER_ARRAYS_VAR, &wrapper_str)?;
        }

        config.validate()?;
        debug!(
            discriminator = %config.discriminator,
            emit_wrapper_arrays = config.emit_wrapper_arrays,
            "loaded codec configuration from environment"
        );
        Ok(config)
    }

    /// Check the configuration can produce readable documents
    pub fn validate(&self) -> Result<()> {
        if self.discriminator.trim().is_empty() {
            return Err(Error::configuration("discriminator field name must not be empty"));
        }
        if self.discriminator != self.discriminator.trim() {
            return Err(Error::configuration(format!(
                "discriminator field name '{}' must not have surrounding whitespace",
                self.discriminator
            )));
        }
        Ok(())
    }
}

pub(crate) fn parse_flag(variable: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{variable} must be a boolean, got '{other}'"
        ))),
    }
}

/// Builder for creating codec configurations
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CodecConfig::default(),
        }
    }

    /// Set the discriminator field name
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.config.discriminator = discriminator.into();
        self
    }

    /// Enable or disable wrapper-form arrays on encode
    pub fn with_wrapper_arrays(mut self, enabled: bool) -> Self {
        self.config.emit_wrapper_arrays = enabled;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<CodecConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CodecConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
