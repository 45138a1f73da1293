//! Complex objects carried as concrete Rust types

use polycache_core::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use std::any::{Any, TypeId};
use std::fmt;

/// A type that can be stored as a tagged complex object.
///
/// The type name written as the discriminator defaults to
/// [`std::any::type_name`]. Override [`Cacheable::type_name`] to pin a
/// name that survives module moves:
///
/// ```
/// use polycache_codec::Cacheable;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Account {
///     id: u64,
///     owner: String,
/// }
///
/// impl Cacheable for Account {
///     fn type_name() -> &'static str {
///         "billing.Account"
///     }
/// }
///
/// assert_eq!(<Account as Cacheable>::type_name(), "billing.Account");
/// ```
pub trait Cacheable: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Fully-qualified name written to the discriminator field
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Object-safe view over a [`Cacheable`] value
trait DynObject: Any + Send + Sync {
    fn type_name(&self) -> &'static str;
    fn to_tree(&self) -> serde_json::Result<JsonValue>;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_boxed(&self) -> Box<dyn DynObject>;
    fn fmt_dyn(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Cacheable> DynObject for T {
    fn type_name(&self) -> &'static str {
        <T as Cacheable>::type_name()
    }

    fn to_tree(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn DynObject> {
        Box::new(self.clone())
    }

    fn fmt_dyn(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A complex object of some concrete [`Cacheable`] type
pub struct Object {
    inner: Box<dyn DynObject>,
}

impl Object {
    /// Wrap a concrete value
    pub fn new<T: Cacheable>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// The concrete type's own name (see [`Cacheable::type_name`])
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    /// `TypeId` of the wrapped value
    pub fn type_id(&self) -> TypeId {
        self.inner.as_any().type_id()
    }

    /// Whether the wrapped value is a `T`
    pub fn is<T: Cacheable>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Borrow the wrapped value as a `T`
    pub fn downcast_ref<T: Cacheable>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Take the wrapped value out as a `T`, or give the object back
    pub fn downcast<T: Cacheable>(self) -> std::result::Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.inner.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("type id checked above"),
        }
    }

    /// Untagged document tree of the wrapped value
    pub fn to_tree(&self) -> Result<JsonValue> {
        self.inner
            .to_tree()
            .map_err(|e| Error::encoding_with_source(self.type_name(), e))
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_dyn(f)
    }
}
