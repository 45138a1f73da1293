use serde_json::error::Category;

/// Result type alias for polycache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for polycache operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Top-level bytes are not a supported document shape
    #[error("malformed document: {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A value could not be converted into a document tree
    #[error("failed to encode value of type '{type_name}': {message}")]
    EncodingFailure {
        type_name: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A type or container name has no match in this process
    #[error("type '{type_name}' is not registered")]
    UnresolvableType { type_name: String },

    /// A decoded document does not fit the type requested by the caller
    #[error("cannot convert document into '{target}': {message}")]
    Conversion {
        target: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => Error::Conversion {
                target: "unknown".to_string(),
                message: error.to_string(),
                source: Some(error),
            },
            Category::Syntax | Category::Eof | Category::Io => Error::MalformedDocument {
                message: error.to_string(),
                source: Some(error),
            },
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a malformed document error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedDocument {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed document error from a parser failure
    #[must_use]
    pub fn malformed_with_source(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::MalformedDocument {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an encoding failure
    #[must_use]
    pub fn encoding(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::EncodingFailure {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an encoding failure caused by the tree codec
    #[must_use]
    pub fn encoding_with_source(type_name: impl Into<String>, source: serde_json::Error) -> Self {
        Error::EncodingFailure {
            type_name: type_name.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create an unresolvable type error
    #[must_use]
    pub fn unresolvable(type_name: impl Into<String>) -> Self {
        Error::UnresolvableType {
            type_name: type_name.into(),
        }
    }

    /// Create a conversion error caused by the tree codec
    #[must_use]
    pub fn conversion(target: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Conversion {
            target: target.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error means the stored bytes are unreadable
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedDocument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_converts_to_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: Error = err.into();
        assert!(converted.is_malformed());
    }

    #[test]
    fn test_data_error_converts_to_conversion() {
        let err = serde_json::from_str::<u8>("\"text\"").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::Conversion { .. }));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::unresolvable("acme::Gone").to_string(),
            "type 'acme::Gone' is not registered"
        );
        assert_eq!(
            Error::encoding("f64", "non-finite float").to_string(),
            "failed to encode value of type 'f64': non-finite float"
        );
        assert_eq!(
            Error::configuration("discriminator must not be empty").to_string(),
            "configuration error: discriminator must not be empty"
        );
    }
}
