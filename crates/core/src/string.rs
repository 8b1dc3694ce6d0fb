//! Generic string scalar, used pervasively by composite value objects.

use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValueObjectError, ValueObjectResult};
use crate::native::{FromNative, expect_arity, expect_str};
use crate::util::same_variant;
use crate::value_object::ValueObject;

/// A string value object. Any string is valid, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringLiteral(String);

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn to_native(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromNative for StringLiteral {
    const ARITY: usize = 1;

    fn from_native(natives: &[Value]) -> ValueObjectResult<Self> {
        let [value] = expect_arity::<1>(natives, "StringLiteral::from_native")?;
        Self::try_from(value)
    }
}

impl TryFrom<&Value> for StringLiteral {
    type Error = ValueObjectError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        expect_str(value).map(Self::new)
    }
}

impl From<&str> for StringLiteral {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StringLiteral {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl ValueObject for StringLiteral {
    fn same_value_as(&self, other: &dyn ValueObject) -> bool {
        same_variant(self, other).is_some_and(|other| self.to_native() == other.to_native())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl core::fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
