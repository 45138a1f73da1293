//! String-keyed maps backing [`Value::Map`](crate::Value::Map)

use super::kind::MapKind;
use crate::value::Value;
use dashmap::DashMap;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// A string-keyed map of values in one concrete container
#[derive(Debug, Clone)]
pub enum MapValue {
    HashMap(HashMap<String, Value>),
    IndexMap(IndexMap<String, Value>),
    BTreeMap(BTreeMap<String, Value>),
    Concurrent(DashMap<String, Value>),
}

impl MapValue {
    /// Create an empty map of the given kind
    pub fn new(kind: MapKind) -> Self {
        match kind {
            MapKind::Unordered => Self::HashMap(HashMap::new()),
            MapKind::InsertionOrdered => Self::IndexMap(IndexMap::new()),
            MapKind::Sorted => Self::BTreeMap(BTreeMap::new()),
            MapKind::Concurrent => Self::Concurrent(DashMap::new()),
        }
    }

    pub fn kind(&self) -> MapKind {
        match self {
            Self::HashMap(_) => MapKind::Unordered,
            Self::IndexMap(_) => MapKind::InsertionOrdered,
            Self::BTreeMap(_) => MapKind::Sorted,
            Self::Concurrent(_) => MapKind::Concurrent,
        }
    }

    /// Insert an entry, returning the value previously stored under `key`
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match self {
            Self::HashMap(map) => map.insert(key, value),
            Self::IndexMap(map) => map.insert(key, value),
            Self::BTreeMap(map) => map.insert(key, value),
            Self::Concurrent(map) => map.insert(key, value),
        }
    }

    /// Copy of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::HashMap(map) => map.get(key).cloned(),
            Self::IndexMap(map) => map.get(key).cloned(),
            Self::BTreeMap(map) => map.get(key).cloned(),
            Self::Concurrent(map) => map.get(key).map(|entry| entry.value().clone()),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Self::HashMap(map) => map.contains_key(key),
            Self::IndexMap(map) => map.contains_key(key),
            Self::BTreeMap(map) => map.contains_key(key),
            Self::Concurrent(map) => map.contains_key(key),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::HashMap(map) => map.len(),
            Self::IndexMap(map) => map.len(),
            Self::BTreeMap(map) => map.len(),
            Self::Concurrent(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every entry in the map's own order, stopping at the first error
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&str, &Value) -> Result<(), E>,
    {
        match self {
            Self::HashMap(map) => map.iter().try_for_each(|(k, v)| f(k.as_str(), v)),
            Self::IndexMap(map) => map.iter().try_for_each(|(k, v)| f(k.as_str(), v)),
            Self::BTreeMap(map) => map.iter().try_for_each(|(k, v)| f(k.as_str(), v)),
            Self::Concurrent(map) => map.iter().try_for_each(|entry| f(entry.key().as_str(), entry.value())),
        }
    }

    /// Keys in the map's own order
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.len());
        let _ = self.try_for_each(|key, _| {
            keys.push(key.to_string());
            Ok::<(), ()>(())
        });
        keys
    }

    /// Copies of all entries, sorted by key
    pub fn sorted_entries(&self) -> Vec<(String, Value)> {
        let mut entries = Vec::with_capacity(self.len());
        let _ = self.try_for_each(|key, value| {
            entries.push((key.to_string(), value.clone()));
            Ok::<(), ()>(())
        });
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Take the entries out in the map's own order
    pub fn into_entries(self) -> Vec<(String, Value)> {
        match self {
            Self::HashMap(map) => map.into_iter().collect(),
            Self::IndexMap(map) => map.into_iter().collect(),
            Self::BTreeMap(map) => map.into_iter().collect(),
            Self::Concurrent(map) => map.into_iter().collect(),
        }
    }
}

impl Default for MapValue {
    fn default() -> Self {
        Self::new(MapKind::default())
    }
}

impl Extend<(String, Value)> for MapValue {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
