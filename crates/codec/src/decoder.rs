//! Decoder: document bytes back to values.
//!
//! A malformed top-level document fails the whole call. Below the top
//! level nothing fails: a node whose type name does not resolve, or whose
//! fields no longer fit the resolved type, degrades to a generic map or
//! list and decoding carries on with its siblings.

use crate::config::CodecConfig;
use crate::container::{Collection, CollectionKind, ContainerKind, MapKind, MapValue};
use crate::registry::{ObjectType, TypeHandle, TypeRegistry};
use crate::value::{Scalar, Value};
use polycache_core::{Error, Result, ARRAY_START, OBJECT_START, WRAPPER_ARRAY_LEN};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace, warn};


pub(crate) struct Decoder<'a> {
    registry: &'a TypeRegistry,
    config: &'a CodecConfig,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(registry: &'a TypeRegistry, config: &'a CodecConfig) -> Self {
        Self { registry, config }
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let Some(first) = bytes.iter().copied().find(|b| !b.is_ascii_whitespace()) else {
            return Ok(Value::Null);
        };

        let value = match first {
            ARRAY_START => {
                let elements: Vec<JsonValue> = serde_json::from_slice(bytes)
                    .map_err(|e| Error::malformed_with_source("invalid array document", e))?;
                self.decode_array(elements)
            }
            OBJECT_START => {
                let fields: Map<String, JsonValue> = serde_json::from_slice(bytes)
                    .map_err(|e| Error::malformed_with_source("invalid object document", e))?;
                self.decode_object(fields)
            }
            _ => {
                let tree: JsonValue = serde_json::from_slice(bytes)
                    .map_err(|e| Error::malformed_with_source("invalid scalar document", e))?;
                self.decode_node(tree)
            }
        };

        debug!(
            type_name = value.type_name(),
            bytes = bytes.len(),
            "decoded value"
        );
        Ok(value)
    }

    /// Decode any tree node with the same rules as a top-level document
    pub(crate) fn decode_node(&self, tree: JsonValue) -> Value {
        match tree {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Value::Scalar(Scalar::from_number(&n)),
            JsonValue::String(s) => Value::Scalar(Scalar::String(s)),
            JsonValue::Array(elements) => self.decode_array(elements),
            JsonValue::Object(fields) => self.decode_object(fields),
        }
    }

    fn decode_array(&self, elements: Vec<JsonValue>) -> Value {
        if elements.is_empty() {
            return Value::Collection(Collection::new(CollectionKind::default()));
        }

        let elements = match <[JsonValue; WRAPPER_ARRAY_LEN]>::try_from(elements) {
            Ok([JsonValue::String(name), JsonValue::Array(inner)]) => match self.wrapper_kind(&name) {
                Some(kind) => {
                    trace!(type_name = %name, kind = ?kind, "decoding wrapper array");
                    return Value::Collection(self.decode_elements(kind, inner));
                }
                None => vec![JsonValue::String(name), JsonValue::Array(inner)],
            },
            Ok(pair) => pair.into(),
            Err(elements) => elements,
        };

        Value::Collection(self.decode_elements(CollectionKind::default(), elements))
    }

    /// Collection kind named by a wrapper array's first element.
    ///
    /// `None` sends the caller back to decoding the whole array in legacy form.
    fn wrapper_kind(&self, name: &str) -> Option<CollectionKind> {
        match self.registry.resolve(name) {
            Some(TypeHandle::Container(ContainerKind::Collection(kind))) => Some(kind),
            Some(_) => {
                warn!(
                    type_name = %name,
                    "wrapper array names a non-collection type; decoding as a legacy array"
                );
                None
            }
            None => {
                trace!(
                    first = %name,
                    "leading string is not a container type; decoding as a legacy array"
                );
                None
            }
        }
    }

    fn decode_elements(&self, kind: CollectionKind, elements: Vec<JsonValue>) -> Collection {
        let mut collection = Collection::new(kind);
        for element in elements {
            collection.insert(self.decode_element(element));
        }
        collection
    }

    /// Decode a direct array element, honoring an inline `[typeName, object]` tag
    fn decode_element(&self, element: JsonValue) -> Value {
        let JsonValue::Array(elements) = element else {
            return self.decode_node(element);
        };
        match <[JsonValue; 2]>::try_from(elements) {
            Ok([JsonValue::String(name), JsonValue::Object(fields)]) => {
                self.decode_inline_tag(name, fields)
            }
            Ok(pair) => self.decode_array(pair.into()),
            Err(elements) => self.decode_array(elements),
        }
    }

    fn decode_inline_tag(&self, name: String, fields: Map<String, JsonValue>) -> Value {
        match self.registry.resolve(&name) {
            Some(TypeHandle::Object(ty)) => self.materialize(ty, fields),
            Some(TypeHandle::Container(ContainerKind::Map(kind))) => self.decode_entries(kind, fields),
            _ => {
                warn!(
                    type_name = %name,
                    "inline type tag does not name an object or map type; keeping the pair as a list"
                );
                let pair = vec![JsonValue::String(name), JsonValue::Object(fields)];
                Value::Collection(self.decode_elements(CollectionKind::default(), pair))
            }
        }
    }

    fn decode_object(&self, mut fields: Map<String, JsonValue>) -> Value {
        let type_name = match fields.shift_remove(&self.config.discriminator) {
            None => None,
            Some(JsonValue::String(name)) => Some(name),
            Some(other) => {
                warn!(discriminator = %other, "ignoring non-string discriminator");
                None
            }
        };

        let Some(type_name) = type_name else {
            return self.decode_entries(MapKind::default(), fields);
        };

        match self.registry.resolve(&type_name) {
            Some(TypeHandle::Object(ty)) => self.materialize(ty, fields),
            Some(TypeHandle::Container(ContainerKind::Map(kind))) => self.decode_entries(kind, fields),
            Some(TypeHandle::Container(ContainerKind::Collection(kind))) => {
                warn!(type_name = %type_name, kind = ?kind, "object tagged with a collection type; decoding as a generic map");
                self.decode_entries(MapKind::default(), fields)
            }
            None => {
                warn!(type_name = %type_name, "unknown type; decoding as a generic map");
                self.decode_entries(MapKind::default(), fields)
            }
        }
    }

    fn decode_entries(&self, kind: MapKind, fields: Map<String, JsonValue>) -> Value {
        let mut map = MapValue::new(kind);
        for (key, value) in fields {
            map.insert(key, self.decode_node(value));
        }
        Value::Map(map)
    }

    fn materialize(&self, ty: &ObjectType, fields: Map<String, JsonValue>) -> Value {
        let tree = JsonValue::Object(fields);
        let err = match ty.materialize(&tree) {
            Ok(object) => return Value::Object(object),
            Err(err) => err,
        };

        warn!(
            type_name = ty.name(),
            error = %err,
            "stored fields no longer fit the type; decoding as a generic map"
        );
        match tree {
            JsonValue::Object(fields) => self.decode_entries(MapKind::default(), fields),
            other => self.decode_node(other),
        }
    }
}
