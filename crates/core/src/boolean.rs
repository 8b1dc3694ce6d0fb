//! Boolean scalar value object.

use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValueObjectError, ValueObjectResult};
use crate::native::{FromNative, expect_arity, expect_bool};
use crate::util::same_variant;
use crate::value_object::ValueObject;

/// A validated truth value.
///
/// Only genuine booleans are accepted from natives; `1`, `"true"` and `null`
/// are rejected even though other languages would treat them as truthy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boolean(bool);

impl Boolean {
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// The wrapped primitive, unchanged.
    pub const fn to_native(&self) -> bool {
        self.0
    }

    pub const fn is_true(&self) -> bool {
        self.0
    }
}

impl FromNative for Boolean {
    const ARITY: usize = 1;

    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [value] = expect_arity::<1>(natives, "Boolean::from_native")?;
        Self::try_from(value)
    }
}

impl TryFrom<&Value> for Boolean {
    type Error = ValueObjectError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        expect_bool(value).map(Self)
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

impl ValueObject for Boolean {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| self.to_native() == other.to_native())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl core::fmt::Display for Boolean {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(if self.is_true() { "true" } else { "false" })
    }
}
