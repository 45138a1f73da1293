//! Type Resolver: an explicit registry from discriminator names to
//! constructors, populated at startup and read-only afterwards.
//!
//! Resolution never fails loudly. A name that has no match in this
//! process (a type renamed or removed since the document was written)
//! resolves to `None`, and the decoder degrades that node to a generic
//! representation.

use crate::container::{base_name, ContainerKind};
use crate::value::{Cacheable, Object};
use polycache_core::{Error, Result};
use serde_json::Value as JsonValue;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::{debug, warn};

type Materializer = fn(&JsonValue) -> serde_json::Result<Object>;

fn materialize_as<T: Cacheable>(tree: &JsonValue) -> serde_json::Result<Object> {
    T::deserialize(tree).map(Object::new)
}

/// A registered complex object type
#[derive(Clone)]
pub struct ObjectType {
    name: String,
    type_id: TypeId,
    materialize: Materializer,
}

impl ObjectType {
    /// Canonical name written to the discriminator field
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Reconstruct the concrete type from an untagged tree
    pub fn materialize(&self, tree: &JsonValue) -> Result<Object> {
        (self.materialize)(tree).map_err(|e| Error::conversion(self.name.clone(), e))
    }
}

impl std::fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("type_id", &self.type_id)
            .finish()
    }
}

/// What a type name resolved to
#[derive(Debug, Clone, Copy)]
pub enum TypeHandle<'a> {
    /// A registered complex object type
    Object(&'a ObjectType),
    /// A collection or map kind the container factory can build
    Container(ContainerKind),
}

/// Registry of object types and container names known to this process
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    objects: HashMap<String, ObjectType>,
    names_by_id: HashMap<TypeId, String>,
    containers: HashMap<String, ContainerKind>,
}

impl TypeRegistry {
    /// Create an empty registry; built-in container names resolve without registration
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under [`Cacheable::type_name`]
    pub fn register<T: Cacheable>(&mut self) -> &mut Self {
        let name = T::type_name().to_string();
        let type_id = TypeId::of::<T>();

        if let Some(existing) = self.objects.get(&name) {
            if existing.type_id != type_id {
                warn!(type_name = %name, "type name registered twice; the later registration wins");
            }
        }

        debug!(type_name = %name, "registered object type");
        self.names_by_id.insert(type_id, name.clone());
        self.objects.insert(
            name.clone(),
            ObjectType {
                name,
                type_id,
                materialize: materialize_as::<T>,
            },
        );
        self
    }

    /// Accept documents written under another name for `T`, e.g. the
    /// name it had before a rename. Encoding keeps using the canonical name.
    pub fn register_alias<T: Cacheable>(&mut self, alias: impl Into<String>) -> &mut Self {
        let alias = alias.into();
        if !self.names_by_id.contains_key(&TypeId::of::<T>()) {
            self.register::<T>();
        }
        let name = T::type_name().to_string();
        if let Some(canonical) = self.objects.get(&name).cloned() {
            debug!(alias = %alias, type_name = %name, "registered type alias");
            self.objects.insert(alias, canonical);
        }
        self
    }

    /// Map a foreign container type name onto a container kind.
    ///
    /// The name is matched exactly, generic arguments aside, so an
    /// unqualified name is honored here even though the built-in table
    /// only accepts qualified ones.
    pub fn register_container(&mut self, name: impl Into<String>, kind: ContainerKind) -> &mut Self {
        let name = name.into();
        debug!(container = %name, kind = ?kind, "registered container name");
        self.containers.insert(base_name(&name).to_string(), kind);
        self
    }

    /// Resolve a discriminator or container-type name.
    ///
    /// Lookup order: registered objects and aliases, registered container
    /// names, then the container factory's built-in names.
    pub fn resolve(&self, name: &str) -> Option<TypeHandle<'_>> {
        let trimmed = name.trim();
        if let Some(object) = self.objects.get(trimmed) {
            return Some(TypeHandle::Object(object));
        }
        if let Some(kind) = self.containers.get(base_name(trimmed)) {
            return Some(TypeHandle::Container(*kind));
        }
        if let Some(kind) = ContainerKind::from_name(trimmed) {
            return Some(TypeHandle::Container(kind));
        }
        debug!(type_name = %trimmed, "type name did not resolve");
        None
    }

    /// Like [`resolve`](Self::resolve), for callers that need the type to exist
    pub fn require(&self, name: &str) -> Result<TypeHandle<'_>> {
        self.resolve(name).ok_or_else(|| Error::unresolvable(name))
    }

    /// Name to write as the discriminator for an object
    pub fn name_of<'a>(&'a self, object: &Object) -> &'a str {
        self.names_by_id
            .get(&object.type_id())
            .map_or_else(|| object.type_name(), String::as_str)
    }

    /// Whether a name resolves to a registered object type
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name.trim())
    }

    /// Number of registered object names, aliases included
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
