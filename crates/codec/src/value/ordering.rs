//! Total equality, ordering and hashing for values.
//!
//! Every set kind stores [`Value`]s, so values need `Eq + Hash + Ord`
//! even though they may hold floats and type-erased objects.
//!
//! - floats compare by `f64::total_cmp`
//! - numbers of different representations order by magnitude first and
//!   are never equal to each other (`1` != `1.0`)
//! - objects compare by type name, then by their canonical tree
//! - containers compare by kind, then by elements; unordered kinds
//!   (hash set, hash map, concurrent map) compare order-insensitively

use super::{Object, Scalar, Value};
use crate::container::{Collection, CollectionKind, MapValue};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

impl Value {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Scalar(_) => 1,
            Self::Object(_) => 2,
            Self::Collection(_) => 3,
            Self::Map(_) => 4,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Scalar(a), Self::Scalar(b)) => a.cmp(b),
            (Self::Object(a), Self::Object(b)) => a.cmp(b),
            (Self::Collection(a), Self::Collection(b)) => a.cmp(b),
            (Self::Map(a), Self::Map(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Null => {}
            Self::Scalar(scalar) => scalar.hash(state),
            Self::Object(object) => object.hash(state),
            Self::Collection(collection) => collection.hash(state),
            Self::Map(map) => map.hash(state),
        }
    }
}

// Scalars

impl Scalar {
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) => 1,
            Self::UInt(_) => 2,
            Self::Float(_) => 3,
            Self::String(_) => 4,
        }
    }

    fn magnitude(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::UInt(u) => Some(*u as f64),
            Self::Float(f) => Some(*f),
            Self::Bool(_) | Self::String(_) => None,
        }
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::UInt(a), Self::UInt(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            _ => match (self.magnitude(), other.magnitude()) {
                (Some(a), Some(b)) => a.total_cmp(&b).then(self.rank().cmp(&other.rank())),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::UInt(u) => u.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::String(s) => s.hash(state),
        }
    }
}

// Objects

impl Object {
    /// Tree rendered with object keys sorted, so field order never matters
    fn canonical_form(&self) -> String {
        match self.to_tree() {
            Ok(tree) => {
                let mut out = String::new();
                write_canonical(&tree, &mut out);
                out
            }
            Err(_) => format!("{self:?}"),
        }
    }
}

fn write_canonical(tree: &JsonValue, out: &mut String) {
    match tree {
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        JsonValue::Object(fields) => {
            let mut sorted: Vec<_> = fields.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, value)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{}:", JsonValue::String(key.clone()));
                write_canonical(value, out);
            }
            out.push('}');
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name()
            .cmp(other.type_name())
            .then_with(|| self.canonical_form().cmp(&other.canonical_form()))
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name().hash(state);
        self.canonical_form().hash(state);
    }
}

// Collections

impl Collection {
    /// Elements in comparison order: iteration order for ordered kinds,
    /// sorted for the unordered set
    fn comparison_order(&self) -> Vec<&Value> {
        let mut items: Vec<&Value> = self.iter().collect();
        if self.kind() == CollectionKind::UnorderedSet {
            items.sort();
        }
        items
    }
}

impl Ord for Collection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.comparison_order().cmp(&other.comparison_order()))
    }
}

impl PartialOrd for Collection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Collection {}

impl Hash for Collection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.comparison_order().hash(state);
    }
}

// Maps

impl Ord for MapValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.sorted_entries().cmp(&other.sorted_entries()))
    }
}

impl PartialOrd for MapValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MapValue {}

impl Hash for MapValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.sorted_entries().hash(state);
    }
}
