//! The engine handed to the cache store: encode on write, decode on read.

use crate::config::CodecConfig;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::registry::TypeRegistry;
use crate::value::Value;
use indexmap::IndexMap;
use polycache_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::hash::Hash;
use std::sync::Arc;

/// Polymorphic document codec.
///
/// The registry and configuration are frozen once the codec is built, so
/// a codec can be cloned freely and shared across threads.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: Arc<TypeRegistry>,
    config: Arc<CodecConfig>,
}

impl Codec {
    /// Create a codec with the default configuration
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(CodecConfig::default()),
        }
    }

    /// Create a codec with an explicit configuration
    pub fn with_config(registry: TypeRegistry, config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a value; `Value::Null` encodes to zero bytes
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        Encoder::new(&self.registry, &self.config).encode(value)
    }

    /// Decode bytes without a target type.
    ///
    /// Returns a concrete object, a generic map or a generic list depending
    /// on the tags found and whether they resolve in this process.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        Decoder::new(&self.registry, &self.config).decode(bytes)
    }

    /// Decode bytes as a collection of `T`, collected into `C`.
    ///
    /// Returns `Ok(None)` for an encoded null.
    pub fn decode_collection<T, C>(&self, bytes: &[u8]) -> Result<Option<C>>
    where
        T: DeserializeOwned,
        C: FromIterator<T>,
    {
        let value = self.decode(bytes)?;
        if value.is_null() {
            return Ok(None);
        }

        let items = Vec::<T>::deserialize(value.to_tree()?)
            .map_err(|e| Error::conversion(std::any::type_name::<C>(), e))?;
        Ok(Some(items.into_iter().collect()))
    }

    /// Decode bytes as a map from `K` to `V`, collected into `M`.
    ///
    /// Map values are written untagged, so complex values only come back
    /// as their concrete type through this call.
    pub fn decode_map<K, V, M>(&self, bytes: &[u8]) -> Result<Option<M>>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
        M: FromIterator<(K, V)>,
    {
        let value = self.decode(bytes)?;
        if value.is_null() {
            return Ok(None);
        }

        let entries = IndexMap::<K, V>::deserialize(value.to_tree()?)
            .map_err(|e| Error::conversion(std::any::type_name::<M>(), e))?;
        Ok(Some(entries.into_iter().collect()))
    }
}
