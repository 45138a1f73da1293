//! Error conversion utilities

use super::types::{CacheError, RecoveryHint, SerializationOp};
use polycache_core::Error as CodecError;

impl CacheError {
    /// Attach a cache key to a codec failure.
    ///
    /// Malformed stored bytes become [`CacheError::Corruption`]; every other
    /// codec failure is a serialization error for the given operation.
    pub fn from_codec(key: impl Into<String>, operation: SerializationOp, error: CodecError) -> Self {
        let key = key.into();
        match error {
            CodecError::MalformedDocument { message, .. } => Self::Corruption {
                key,
                reason: message,
                recovery_hint: RecoveryHint::ClearAndRetry,
            },
            CodecError::Configuration { message } => Self::Configuration {
                message,
                recovery_hint: RecoveryHint::UpdateConfiguration,
            },
            CodecError::Conversion { .. } | CodecError::UnresolvableType { .. } => Self::Serialization {
                key,
                operation,
                source: error,
                recovery_hint: RecoveryHint::TreatAsMiss,
            },
            CodecError::EncodingFailure { .. } => Self::Serialization {
                key,
                operation,
                source: error,
                recovery_hint: RecoveryHint::NoRecovery,
            },
        }
    }
}

/// Convert codec errors that carry no key context
impl From<CodecError> for CacheError {
    fn from(error: CodecError) -> Self {
        let operation = match error {
            CodecError::EncodingFailure { .. } => SerializationOp::Encode,
            _ => SerializationOp::Decode,
        };
        Self::from_codec(String::new(), operation, error)
    }
}

/// Convert cache errors to core errors
impl From<CacheError> for CodecError {
    fn from(error: CacheError) -> Self {
        match error {
            CacheError::Serialization { source, .. } => source,
            CacheError::Corruption { reason, .. } => CodecError::malformed(reason),
            other => CodecError::configuration(other.to_string()),
        }
    }
}
