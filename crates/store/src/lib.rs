//! Cache store boundary for polycache values.
//!
//! ## Key Components
//!
//! - **`store`**: The byte-level [`CacheStore`] trait and the process-local
//!   [`InMemoryStore`].
//! - **`typed`**: [`TypedCache`], which encodes values with a
//!   [`Codec`](polycache_codec::Codec) on write and decodes them on read.
//! - **`errors`**: [`CacheError`] with recovery hints, and the policy for
//!   turning codec failures into store failures.
//! - **`config`**: Key prefix, default TTL and the corrupt-entry policy.

pub mod config;
pub mod errors;
pub mod store;
pub mod typed;

pub use config::{StoreConfig, StoreConfigBuilder};
pub use errors::{CacheError, RecoveryHint, Result, SerializationOp};
pub use store::{CacheStore, InMemoryStore};
pub use typed::TypedCache;
