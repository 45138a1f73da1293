//! The in-memory value model handed to the encoder and returned by the decoder.
//!
//! A [`Value`] is a tagged union over the shapes the wire format can
//! describe: null, scalars, concrete complex objects, collections and
//! string-keyed maps. Containers keep their concrete kind (sorted set,
//! linked list, concurrent map, ...) so callers can tell what they got back.

mod object;
mod ordering;
mod scalar;


pub use object::{Cacheable, Object};
pub use scalar::Scalar;

use crate::container::{Collection, CollectionKind, MapKind, MapValue};
use polycache_core::{Error, Result};
use serde_json::{Map, Value as JsonValue};

/// A cacheable value
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Scalar(Scalar),
    Object(Object),
    Collection(Collection),
    Map(MapValue),
}

impl Value {
    /// Wrap a concrete complex object
    pub fn object<T: Cacheable>(value: T) -> Self {
        Self::Object(Object::new(value))
    }

    /// Build a default-kind list
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::collection(CollectionKind::List, items)
    }

    /// Build a collection of the given kind
    pub fn collection<I, V>(kind: CollectionKind, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Collection(Collection::from_iter_kind(kind, items.into_iter().map(Into::into)))
    }

    /// Build a default-kind (unordered) map
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::map_of(MapKind::Unordered, entries)
    }

    /// Build a map of the given kind
    pub fn map_of<I, K, V>(kind: MapKind, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = MapValue::new(kind);
        for (key, value) in entries {
            map.insert(key.into(), value.into());
        }
        Self::Map(map)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Float(f)) => Some(*f),
            Self::Scalar(Scalar::Int(i)) => Some(*i as f64),
            Self::Scalar(Scalar::UInt(u)) => Some(*u as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow a wrapped complex object as a `T`
    pub fn downcast_ref<T: Cacheable>(&self) -> Option<&T> {
        self.as_object().and_then(Object::downcast_ref)
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the value's runtime type, as far as the value itself knows it
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(scalar) => scalar.type_name(),
            Self::Object(object) => object.type_name(),
            Self::Collection(collection) => collection.kind().wire_name(),
            Self::Map(map) => map.kind().wire_name(),
        }
    }

    /// Convert into an untagged document tree.
    ///
    /// Nested objects, collections and maps are tree-ified as-is; no
    /// discriminator is injected at any depth.
    pub fn to_tree(&self) -> Result<JsonValue> {
        match self {
            Self::Null => Ok(JsonValue::Null),
            Self::Scalar(scalar) => scalar.to_tree(),
            Self::Object(object) => object.to_tree(),
            Self::Collection(collection) => collection
                .iter()
                .map(Value::to_tree)
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array),
            Self::Map(map) => {
                let mut tree = Map::new();
                map.try_for_each(|key, value| {
                    tree.insert(key.to_string(), value.to_tree()?);
                    Ok::<(), Error>(())
                })?;
                Ok(JsonValue::Object(tree))
            }
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Self::Collection(value)
    }
}

impl From<MapValue> for Value {
    fn from(value: MapValue) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! value_from_scalar {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Self::Scalar(Scalar::from(value))
            }
        })*
    };
}

value_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, &str, String);
