//! Encoder: value to tagged document bytes.
//!
//! Arrays are always written in legacy form, where every element carries
//! its own discriminator. Maps written at the top level get no
//! discriminator and their values are tree-ified as-is, so complex map
//! values come back as generic maps unless read through a typed call.

use crate::config::CodecConfig;
use crate::container::{Collection, CollectionKind, MapValue};
use crate::registry::TypeRegistry;
use crate::value::{Object, Value};
use polycache_core::{Error, Result};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

pub(crate) struct Encoder<'a> {
    registry: &'a TypeRegistry,
    config: &'a CodecConfig,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(registry: &'a TypeRegistry, config: &'a CodecConfig) -> Self {
        Self { registry, config }
    }

    pub(crate) fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let document = match value {
            Value::Null => return Ok(Vec::new()),
            Value::Collection(collection) => self.collection_document(collection)?,
            Value::Map(map) => self.map_document(map)?,
            Value::Object(object) => self.object_document(object)?,
            Value::Scalar(scalar) => scalar.to_tree()?,
        };

        let bytes = serde_json::to_vec(&document)
            .map_err(|e| Error::encoding_with_source(value.type_name(), e))?;
        debug!(
            type_name = value.type_name(),
            bytes = bytes.len(),
            "encoded value"
        );
        Ok(bytes)
    }

    fn collection_document(&self, collection: &Collection) -> Result<JsonValue> {
        let elements = collection
            .iter()
            .filter(|member| !member.is_null())
            .map(|member| self.tagged_element(member))
            .collect::<Result<Vec<_>>>()?;

        let kind = collection.kind();
        if self.config.emit_wrapper_arrays && kind != CollectionKind::List {
            trace!(kind = ?kind, "writing wrapper array");
            return Ok(JsonValue::Array(vec![
                JsonValue::String(kind.wire_name().to_string()),
                JsonValue::Array(elements),
            ]));
        }
        Ok(JsonValue::Array(elements))
    }

    /// Tree-ify a direct array element, tagging it when it can carry a tag
    fn tagged_element(&self, member: &Value) -> Result<JsonValue> {
        match member {
            Value::Object(object) => self.object_document(object),
            Value::Map(map) => {
                let kind_name = map.kind().wire_name();
                self.tag(member.to_tree()?, kind_name, kind_name)
            }
            _ => member.to_tree(),
        }
    }

    fn map_document(&self, map: &MapValue) -> Result<JsonValue> {
        let mut document = Map::new();
        map.try_for_each(|key, value| {
            document.insert(key.to_string(), value.to_tree()?);
            Ok::<(), Error>(())
        })?;
        Ok(JsonValue::Object(document))
    }

    fn object_document(&self, object: &Object) -> Result<JsonValue> {
        let name = self.registry.name_of(object);
        self.tag(object.to_tree()?, name, object.type_name())
    }

    /// Inject the discriminator as the first field of an object tree
    fn tag(&self, tree: JsonValue, tag: &str, source_type: &str) -> Result<JsonValue> {
        let JsonValue::Object(fields) = tree else {
            return Err(Error::encoding(
                source_type,
                "value does not serialize to an object and cannot carry a type discriminator",
            ));
        };

        let mut tagged = Map::with_capacity(fields.len() + 1);
        tagged.insert(
            self.config.discriminator.clone(),
            JsonValue::String(tag.to_string()),
        );
        for (key, value) in fields {
            if key != self.config.discriminator {
                tagged.insert(key, value);
            }
        }
        Ok(JsonValue::Object(tagged))
    }
}
