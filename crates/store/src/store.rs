//! Byte-level key-value store boundary
//!
//! The codec only produces and consumes bytes; a [`CacheStore`] decides
//! where they live and when they expire.

use crate::errors::{CacheError, RecoveryHint, Result};
use dashmap::DashMap;
use globset::Glob;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// A key-value store holding encoded values
pub trait CacheStore: Send + Sync {
    /// Fetch the bytes stored under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store bytes under `key`, replacing any previous value
    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<()>;

    /// Remove `key`, returning whether it was present
    fn delete(&self, key: &str) -> Result<bool>;

    /// Live keys matching a glob pattern, sorted
    fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Clone)]
struct StoredEntry {
    bytes: Vec<u8>,
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Process-local store; expired entries are dropped lazily on access
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, StoredEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, expired ones included until they are purged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, "purged expired cache entries");
        }
        removed
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".to_string(),
            recovery_hint: RecoveryHint::NoRecovery,
        });
    }
    if key.chars().any(char::is_control) {
        return Err(CacheError::InvalidKey {
            key: key.escape_debug().to_string(),
            reason: "key must not contain control characters".to_string(),
            recovery_hint: RecoveryHint::NoRecovery,
        });
    }
    Ok(())
}

impl CacheStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Ok(Some(entry.bytes.clone()));
            }
        } else {
            return Ok(None);
        }

        // expired; re-check under the write lock so a concurrent set is kept
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            trace!(key, "dropped expired entry");
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<()> {
        validate_key(key)?;
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        trace!(key, bytes = value.len(), ttl = ?ttl, "storing entry");
        self.entries.insert(
            key.to_string(),
            StoredEntry {
                bytes: value,
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Glob::new(pattern)
            .map_err(|source| CacheError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
                recovery_hint: RecoveryHint::NoRecovery,
            })?
            .compile_matcher();

        let now = Instant::now();
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_expired(now))
            .filter(|entry| matcher.is_match(entry.key().as_str()))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}
