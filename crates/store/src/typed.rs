//! Value-level cache over a byte store

use crate::config::StoreConfig;
use crate::errors::{CacheError, Result, SerializationOp};
use crate::store::CacheStore;
use polycache_codec::{Codec, Value};
use serde::de::DeserializeOwned;
use std::hash::Hash;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache of [`Value`]s, encoded with a [`Codec`] into a [`CacheStore`].
///
/// Reads distinguish a miss (`Ok(None)`) from a stored null
/// (`Ok(Some(Value::Null))`).
pub struct TypedCache<S> {
    store: S,
    codec: Codec,
    config: StoreConfig,
}

impl<S: CacheStore> TypedCache<S> {
    pub fn new(store: S, codec: Codec) -> Self {
        Self::with_config(store, codec, StoreConfig::default())
    }

    pub fn with_config(store: S, codec: Codec, config: StoreConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Store a value with the configured default TTL
    pub fn put(&self, key: &str, value: &Value) -> Result<()> {
        self.put_with_ttl(key, value, self.config.default_ttl)
    }

    /// Store a value with an explicit TTL; `None` never expires
    pub fn put_with_ttl(&self, key: &str, value: &Value, ttl: Option<Duration>) -> Result<()> {
        let bytes = self
            .codec
            .encode(value)
            .map_err(|e| CacheError::from_codec(key, SerializationOp::Encode, e))?;
        debug!(key, bytes = bytes.len(), "cache put");
        self.store.set(&self.config.qualify(key), bytes, ttl)
    }

    /// Read a value without a target type
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        self.read(key, |codec, bytes| codec.decode(bytes).map(Some))
    }

    /// Read a stored collection as elements of `T` collected into `C`
    pub fn get_collection<T, C>(&self, key: &str) -> Result<Option<C>>
    where
        T: DeserializeOwned,
        C: FromIterator<T>,
    {
        self.read(key, |codec, bytes| codec.decode_collection::<T, C>(bytes))
    }

    /// Read a stored map as `K` to `V` entries collected into `M`
    pub fn get_map<K, V, M>(&self, key: &str) -> Result<Option<M>>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
        M: FromIterator<(K, V)>,
    {
        self.read(key, |codec, bytes| codec.decode_map::<K, V, M>(bytes))
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.store.delete(&self.config.qualify(key))
    }

    /// Keys under the configured prefix matching a glob pattern, prefix removed
    pub fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let prefix = &self.config.key_prefix;
        Ok(self
            .store
            .keys(&self.config.qualify_pattern(pattern))?
            .into_iter()
            .filter_map(|key| key.strip_prefix(prefix.as_str()).map(str::to_string))
            .collect())
    }

    fn read<T, F>(&self, key: &str, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(&Codec, &[u8]) -> polycache_core::Result<Option<T>>,
    {
        let qualified = self.config.qualify(key);
        let Some(bytes) = self.store.get(&qualified)? else {
            debug!(key, "cache miss");
            return Ok(None);
        };

        match decode(&self.codec, &bytes) {
            Ok(value) => {
                debug!(key, "cache hit");
                Ok(value)
            }
            Err(err) => {
                let err = CacheError::from_codec(key, SerializationOp::Decode, err);
                if err.is_corruption() && self.config.miss_on_corrupt {
                    warn!(key, error = %err, "dropping unreadable cache entry");
                    self.store.delete(&qualified)?;
                    return Ok(None);
                }
                Err(err)
            }
        }
    }
}
