//! Value object error model.

use serde_json::Value;
use thiserror::Error;

/// Result type used by every value object constructor.
pub type ValueObjectResult<T> = Result<T, ValueObjectError>;

/// Construction-time failure.
///
/// Errors are only ever produced while building a value object. Once a value
/// object exists it is valid for its whole lifetime, so none of the read or
/// comparison operations return this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueObjectError {
    /// A native value did not match the type (or domain) a constructor requires.
    #[error("invalid native argument {value}: expected {}", .expected.join(" or "))]
    InvalidNativeArgument {
        value: Value,
        expected: &'static [&'static str],
    },

    /// A fixed-arity `from_native` entry point received the wrong number of natives.
    #[error("{signature} expects exactly {expected} native arguments, got {actual}")]
    ArgumentCountMismatch {
        expected: usize,
        actual: usize,
        signature: &'static str,
    },

    /// A country code that does not resolve to a known country.
    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),

    /// A string that is not a well-formed UUID.
    #[error("invalid uuid: {0}")]
    InvalidUuid(String),
}

impl ValueObjectError {
    pub fn invalid_native(value: &Value, expected: &'static [&'static str]) -> Self {
        tracing::debug!(%value, ?expected, "rejected native argument");
        Self::InvalidNativeArgument {
            value: value.clone(),
            expected,
        }
    }

    pub fn argument_count(expected: usize, actual: usize, signature: &'static str) -> Self {
        tracing::debug!(expected, actual, signature, "native argument count mismatch");
        Self::ArgumentCountMismatch {
            expected,
            actual,
            signature,
        }
    }

    pub fn unknown_country_code(code: impl Into<String>) -> Self {
        Self::UnknownCountryCode(code.into())
    }

    pub fn invalid_uuid(msg: impl Into<String>) -> Self {
        Self::InvalidUuid(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_native_carries_value_and_expected_types() {
        let err = ValueObjectError::invalid_native(&json!(12), &["boolean"]);
        match &err {
            ValueObjectError::InvalidNativeArgument { value, expected } => {
                assert_eq!(value, &json!(12));
                assert_eq!(*expected, ["boolean"]);
            }
            _ => panic!("Expected InvalidNativeArgument"),
        }
        assert_eq!(err.to_string(), "invalid native argument 12: expected boolean");
    }

    #[test]
    fn argument_count_message_names_the_signature() {
        let err = ValueObjectError::argument_count(8, 7, "Address::from_native");
        assert_eq!(
            err.to_string(),
            "Address::from_native expects exactly 8 native arguments, got 7"
        );
    }
}
