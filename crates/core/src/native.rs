//! Uniform construction from native values.
//!
//! A native value is a [`serde_json::Value`]: the dynamically typed boundary where
//! raw input (config, request bodies, fixtures) is turned into value objects.

use serde_json::Value;

use crate::error::{ValueObjectError, ValueObjectResult};

/// Construction from a fixed, ordered list of native values.
///
/// Every value object implements this with the same shape regardless of how many
/// natives it needs, so callers can build any type through one entry point.
/// The argument list is order dependent; a list of the wrong length fails with
/// [`ValueObjectError::ArgumentCountMismatch`] before any element is inspected.
///
/// Composites also offer a typed, fixed-parameter constructor where the arity is
/// checked by the compiler instead.
pub trait FromNative: Sized {
    /// Exact number of natives `from_native` accepts.
    const ARITY: usize;

    fn from_native(natives: &[Value]) -> ValueObjectResult<Self>;
}

/// Checks the native list length and hands it back as a fixed-size array.
pub fn expect_arity<'a, const N: usize>(
    natives: &'a [Value],
    signature: &'static str,
) -> ValueObjectResult<&'a [Value; N]> {
    <&[Value; N]>::try_from(natives)
        .map_err(|_| ValueObjectError::argument_count(N, natives.len(), signature))
}

pub fn expect_str(value: &Value) -> ValueObjectResult<&str> {
    value
        .as_str()
        .ok_or_else(|| ValueObjectError::invalid_native(value, &["string"]))
}

pub fn expect_bool(value: &Value) -> ValueObjectResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| ValueObjectError::invalid_native(value, &["boolean"]))
}
