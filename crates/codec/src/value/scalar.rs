//! Scalar leaves: booleans, numbers and strings

use polycache_core::{Error, Result};
use serde_json::{Number, Value as JsonValue};

/// A scalar leaf value
///
/// `UInt` is only produced for integers above `i64::MAX`; every other
/// integer is normalized to `Int` so equal numbers compare equal.
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Name of the scalar's runtime type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "i64",
            Self::UInt(_) => "u64",
            Self::Float(_) => "f64",
            Self::String(_) => "String",
        }
    }

    /// Convert a parsed JSON number back into a scalar
    pub(crate) fn from_number(number: &Number) -> Self {
        if let Some(i) = number.as_i64() {
            Self::Int(i)
        } else if let Some(u) = number.as_u64() {
            Self::UInt(u)
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }

    pub(crate) fn to_tree(&self) -> Result<JsonValue> {
        Ok(match self {
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Int(i) => JsonValue::from(*i),
            Self::UInt(u) => JsonValue::from(*u),
            Self::Float(f) => Number::from_f64(*f).map(JsonValue::Number).ok_or_else(|| {
                Error::encoding("f64", format!("non-finite float {f} has no document form"))
            })?,
            Self::String(s) => JsonValue::String(s.clone()),
        })
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! scalar_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Scalar {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

scalar_from_signed!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
