//! Core error types for the cache store

/// Result type for cache store operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error type for cache store operations
#[derive(Debug)]
pub enum CacheError {
    /// A value could not be encoded or a stored value could not be decoded
    Serialization {
        key: String,
        operation: SerializationOp,
        source: polycache_core::Error,
        recovery_hint: RecoveryHint,
    },

    /// Stored bytes are not a readable document
    Corruption {
        key: String,
        reason: String,
        recovery_hint: RecoveryHint,
    },

    /// Invalid cache key
    InvalidKey {
        key: String,
        reason: String,
        recovery_hint: RecoveryHint,
    },

    /// Invalid key pattern passed to a listing call
    InvalidPattern {
        pattern: String,
        source: globset::Error,
        recovery_hint: RecoveryHint,
    },

    /// Configuration error
    Configuration {
        message: String,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryHint {
    /// Drop the stored entry and repopulate it
    ClearAndRetry,

    /// Treat the read as a cache miss
    TreatAsMiss,

    /// Update cache configuration
    UpdateConfiguration,

    /// No recovery possible
    NoRecovery,
}

/// Serialization operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationOp {
    Encode,
    Decode,
}
