//! Sequence containers backing [`Value::Collection`](crate::Value::Collection)

use super::kind::CollectionKind;
use crate::value::Value;
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashSet, LinkedList};

/// A collection of values in one concrete container
#[derive(Debug, Clone)]
pub enum Collection {
    List(Vec<Value>),
    LinkedList(LinkedList<Value>),
    HashSet(HashSet<Value>),
    IndexSet(IndexSet<Value>),
    BTreeSet(BTreeSet<Value>),
}

impl Collection {
    /// Create an empty collection of the given kind
    pub fn new(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::List => Self::List(Vec::new()),
            CollectionKind::LinkedList => Self::LinkedList(LinkedList::new()),
            CollectionKind::UnorderedSet => Self::HashSet(HashSet::new()),
            CollectionKind::OrderedSet => Self::IndexSet(IndexSet::new()),
            CollectionKind::SortedSet => Self::BTreeSet(BTreeSet::new()),
        }
    }

    /// Collect values into a container of the given kind
    pub fn from_iter_kind<I: IntoIterator<Item = Value>>(kind: CollectionKind, items: I) -> Self {
        let mut collection = Self::new(kind);
        collection.extend(items);
        collection
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            Self::List(_) => CollectionKind::List,
            Self::LinkedList(_) => CollectionKind::LinkedList,
            Self::HashSet(_) => CollectionKind::UnorderedSet,
            Self::IndexSet(_) => CollectionKind::OrderedSet,
            Self::BTreeSet(_) => CollectionKind::SortedSet,
        }
    }

    /// Add a value with the container's own semantics.
    ///
    /// Returns `false` when a set already held an equal value.
    pub fn insert(&mut self, value: Value) -> bool {
        match self {
            Self::List(items) => {
                items.push(value);
                true
            }
            Self::LinkedList(items) => {
                items.push_back(value);
                true
            }
            Self::HashSet(items) => items.insert(value),
            Self::IndexSet(items) => items.insert(value),
            Self::BTreeSet(items) => items.insert(value),
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::List(items) => items.contains(value),
            Self::LinkedList(items) => items.contains(value),
            Self::HashSet(items) => items.contains(value),
            Self::IndexSet(items) => items.contains(value),
            Self::BTreeSet(items) => items.contains(value),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::LinkedList(items) => items.len(),
            Self::HashSet(items) => items.len(),
            Self::IndexSet(items) => items.len(),
            Self::BTreeSet(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate in the container's own order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Self::List(items) => Box::new(items.iter()),
            Self::LinkedList(items) => Box::new(items.iter()),
            Self::HashSet(items) => Box::new(items.iter()),
            Self::IndexSet(items) => Box::new(items.iter()),
            Self::BTreeSet(items) => Box::new(items.iter()),
        }
    }

    /// Take the values out in the container's own order
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            Self::LinkedList(items) => items.into_iter().collect(),
            Self::HashSet(items) => items.into_iter().collect(),
            Self::IndexSet(items) => items.into_iter().collect(),
            Self::BTreeSet(items) => items.into_iter().collect(),
        }
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(CollectionKind::default())
    }
}

impl Extend<Value> for Collection {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}
