//! Recovery utilities for cache errors

use super::types::{CacheError, RecoveryHint};

impl CacheError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Serialization { recovery_hint, .. }
            | Self::Corruption { recovery_hint, .. }
            | Self::InvalidKey { recovery_hint, .. }
            | Self::InvalidPattern { recovery_hint, .. }
            | Self::Configuration { recovery_hint, .. } => recovery_hint,
        }
    }

    /// Check if this error indicates stored data that can no longer be read
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::Corruption { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::SerializationOp;
    use super::*;

    #[test]
    fn test_corruption_errors() {
        let invalid = CacheError::InvalidKey {
            key: String::new(),
            reason: "key must not be empty".to_string(),
            recovery_hint: RecoveryHint::NoRecovery,
        };
        assert!(!invalid.is_corruption());
        assert_eq!(invalid.recovery_hint(), &RecoveryHint::NoRecovery);

        let corruption = CacheError::Corruption {
            key: "k".to_string(),
            reason: "truncated".to_string(),
            recovery_hint: RecoveryHint::ClearAndRetry,
        };
        assert!(corruption.is_corruption());
        assert_eq!(corruption.recovery_hint(), &RecoveryHint::ClearAndRetry);
    }

    #[test]
    fn test_display_includes_key_and_operation() {
        let err = CacheError::Serialization {
            key: "users:1".to_string(),
            operation: SerializationOp::Encode,
            source: polycache_core::Error::encoding("demo.User", "not an object"),
            recovery_hint: RecoveryHint::NoRecovery,
        };
        let message = err.to_string();
        assert!(message.contains("Encode"), "{message}");
        assert!(message.contains("users:1"), "{message}");
        assert!(std::error::Error::source(&err).is_some());
    }
}
