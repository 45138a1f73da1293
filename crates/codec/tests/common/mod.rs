//! Shared fixtures for the codec integration tests
#![allow(dead_code)]

use polycache_codec::{Cacheable, Codec, CodecConfig, TypeRegistry, Value};
use serde::{Deserialize, Serialize};

/// The two-field type used throughout the round-trip scenarios
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct A {
    pub id: u32,
    pub name: String,
}

impl Cacheable for A {
    fn type_name() -> &'static str {
        "demo.A"
    }
}

impl A {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// A type with nested and optional fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: u64,
    pub lines: Vec<A>,
    pub note: Option<String>,
    pub total: f64,
}

impl Cacheable for Order {
    fn type_name() -> &'static str {
        "demo.Order"
    }
}

pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<A>().register::<Order>();
    registry
}

pub fn codec() -> Codec {
    Codec::new(registry())
}

pub fn wrapper_codec() -> Codec {
    let config = CodecConfig::builder()
        .with_wrapper_arrays(true)
        .build()
        .expect("valid configuration");
    Codec::with_config(registry(), config).expect("valid codec")
}

pub fn roundtrip(codec: &Codec, value: &Value) -> Value {
    let bytes = codec.encode(value).expect("encode");
    codec.decode(&bytes).expect("decode")
}

pub fn elements(value: &Value) -> Vec<Value> {
    value
        .as_collection()
        .expect("expected a collection")
        .iter()
        .cloned()
        .collect()
}

/// Route `tracing` output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
