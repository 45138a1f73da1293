//! Polymorphic tagged-document codec for cached values.
//!
//! Values are written as JSON documents in which complex objects carry a
//! reserved discriminator field (`@class` by default) naming their
//! concrete type. On read, the discriminator is resolved through a
//! [`TypeRegistry`] populated at startup. Names that no longer resolve
//! degrade to generic maps and lists instead of failing the read.
//!
//! ## Key Components
//!
//! - **`value`**: The [`Value`] tagged union and the [`Cacheable`] trait
//!   complex objects implement.
//! - **`container`**: Concrete collection and map kinds, and the factory
//!   that maps container type names onto them.
//! - **`registry`**: Discriminator name to type resolution.
//! - **`codec`**: The [`Codec`] facade with encode, decode and typed decode.
//!
//! ```
//! use polycache_codec::{Cacheable, Codec, TypeRegistry, Value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct A {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl Cacheable for A {
//!     fn type_name() -> &'static str {
//!         "demo.A"
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<A>();
//! let codec = Codec::new(registry);
//!
//! let bytes = codec.encode(&Value::list([Value::object(A { id: 1, name: "x".into() })])).unwrap();
//! assert_eq!(bytes, br#"[{"@class":"demo.A","id":1,"name":"x"}]"#);
//!
//! let decoded = codec.decode(&bytes).unwrap();
//! let first = decoded.as_collection().unwrap().iter().next().unwrap();
//! assert_eq!(first.downcast_ref::<A>().unwrap().name, "x");
//! ```

mod codec;
pub mod config;
pub mod container;
mod decoder;
mod encoder;
pub mod registry;
pub mod value;

pub use codec::Codec;
pub use config::{CodecConfig, CodecConfigBuilder};
pub use container::{
    instantiate, instantiate_named, Collection, CollectionKind, Container, ContainerKind, MapKind,
    MapValue,
};
pub use polycache_core::{Error, Result};
pub use registry::{ObjectType, TypeHandle, TypeRegistry};
pub use value::{Cacheable, Object, Scalar, Value};
